use chrono::{Datelike, Months, NaiveDate};
use flight_hours_db::models::FlightEntryModel;

/// First and last day of the month containing `date`
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Entries dated within `[start, end]`, in input order
pub fn entries_in_range(
    entries: &[FlightEntryModel],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&FlightEntryModel> {
    entries
        .iter()
        .filter(|entry| entry.date >= start && entry.date <= end)
        .collect()
}

/// Entries of one calendar month (1 = January). An invalid month selects nothing.
pub fn entries_in_month(entries: &[FlightEntryModel], year: i32, month: u32) -> Vec<&FlightEntryModel> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => {
            let (start, end) = month_bounds(first);
            entries_in_range(entries, start, end)
        }
        None => Vec::new(),
    }
}

/// Qualifying hours per calendar month of `year`, January first
pub fn monthly_totals_for_year(entries: &[FlightEntryModel], year: i32) -> [f64; 12] {
    let mut totals = [0.0; 12];
    for entry in entries.iter().filter(|entry| entry.date.year() == year) {
        totals[entry.date.month0() as usize] += entry.qualifying_hours();
    }
    totals
}
