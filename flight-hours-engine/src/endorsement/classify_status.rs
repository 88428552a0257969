use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use flight_hours_api::EndorsementStatus;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole calendar days from `today` until `expiration`; negative once past.
pub fn days_until_expiration(expiration: NaiveDate, today: NaiveDate) -> i64 {
    (expiration - today).num_days()
}

/// Days from an instant until the start of the expiration day, rounded up.
///
/// An endorsement expiring today yields 0 at any time of day.
pub fn days_until_expiration_at(expiration: NaiveDate, now: NaiveDateTime) -> i64 {
    let seconds = (expiration.and_time(NaiveTime::MIN) - now).num_seconds();
    (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY)
}

fn status_for_days(days: i64, threshold_days: u32) -> EndorsementStatus {
    if days < 0 {
        EndorsementStatus::Expired
    } else if days <= i64::from(threshold_days) {
        EndorsementStatus::ExpiringSoon
    } else {
        EndorsementStatus::Active
    }
}

/// Lifecycle state of an endorsement with the given expiration.
///
/// The look-ahead window is inclusive at both ends: expiring today or exactly
/// `threshold_days` from today is still "expiring soon".
pub fn classify_status(
    expiration: Option<NaiveDate>,
    today: NaiveDate,
    threshold_days: u32,
) -> EndorsementStatus {
    match expiration {
        None => EndorsementStatus::NeverExpires,
        Some(expiration) => status_for_days(days_until_expiration(expiration, today), threshold_days),
    }
}

/// [`classify_status`] for a caller holding a timestamp instead of a date
pub fn classify_status_at(
    expiration: Option<NaiveDate>,
    now: NaiveDateTime,
    threshold_days: u32,
) -> EndorsementStatus {
    match expiration {
        None => EndorsementStatus::NeverExpires,
        Some(expiration) => status_for_days(days_until_expiration_at(expiration, now), threshold_days),
    }
}

pub fn is_expired(expiration: Option<NaiveDate>, today: NaiveDate) -> bool {
    expiration.is_some_and(|expiration| expiration < today)
}

pub fn is_expiring_soon(expiration: Option<NaiveDate>, today: NaiveDate, threshold_days: u32) -> bool {
    expiration.is_some_and(|expiration| {
        let days = days_until_expiration(expiration, today);
        days >= 0 && days <= i64::from(threshold_days)
    })
}
