use chrono::{Months, NaiveDate};
use flight_hours_api::DurationUnit;
use flight_hours_db::models::{EndorsementRecordModel, EndorsementTemplateModel};
use tracing::debug;

/// Expiration date of an endorsement given on `date_given`.
///
/// `None` means it never expires. Months and years keep the day of month
/// when the target month has it and otherwise land on that month's last day,
/// so January 31 plus one month is the end of February. Without a duration
/// or unit the endorsement expires on the day it was given. Dates past the
/// calendar's range saturate to [`NaiveDate::MAX`].
pub fn compute_expiration(
    date_given: NaiveDate,
    duration: Option<u32>,
    duration_unit: Option<DurationUnit>,
    never_expires: bool,
) -> Option<NaiveDate> {
    if never_expires {
        return None;
    }
    let (Some(duration), Some(unit)) = (duration, duration_unit) else {
        debug!(%date_given, "Endorsement has no duration; expiring on the date given");
        return Some(date_given);
    };

    let expiration = match unit {
        DurationUnit::Days => date_given.checked_add_days(chrono::Days::new(u64::from(duration))),
        DurationUnit::Months => date_given.checked_add_months(Months::new(duration)),
        DurationUnit::Years => duration
            .checked_mul(12)
            .and_then(|months| date_given.checked_add_months(Months::new(months))),
    };
    Some(expiration.unwrap_or(NaiveDate::MAX))
}

/// Expiration of `record` under `template`
pub fn expiration_for(
    record: &EndorsementRecordModel,
    template: &EndorsementTemplateModel,
) -> Option<NaiveDate> {
    compute_expiration(
        record.date_given,
        template.duration,
        template.duration_unit,
        template.never_expires,
    )
}
