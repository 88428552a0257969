use chrono::NaiveDate;
use flight_hours_db::models::{FlightEntryModel, WeeklyOffDaysModel};
use std::collections::HashSet;
use tracing::debug;

use super::month::month_bounds;

/// Days of a month to pre-mark OFF: selected weekdays on or after the
/// schedule's effective date that have nothing logged yet.
pub fn scheduled_off_days(
    schedule: &WeeklyOffDaysModel,
    year: i32,
    month: u32,
    existing: &[FlightEntryModel],
) -> Vec<NaiveDate> {
    if schedule.is_empty() {
        return Vec::new();
    }
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let (start, end) = month_bounds(first);
    let logged: HashSet<NaiveDate> = existing.iter().map(|entry| entry.date).collect();

    let days: Vec<NaiveDate> = start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| schedule.applies_to(*day) && !logged.contains(day))
        .collect();
    debug!(year, month, scheduled = days.len(), "Scheduled weekly off days");
    days
}

/// New OFF entries for [`scheduled_off_days`]
pub fn off_day_entries(
    schedule: &WeeklyOffDaysModel,
    year: i32,
    month: u32,
    existing: &[FlightEntryModel],
) -> Vec<FlightEntryModel> {
    scheduled_off_days(schedule, year, month, existing)
        .into_iter()
        .map(FlightEntryModel::off_day)
        .collect()
}
