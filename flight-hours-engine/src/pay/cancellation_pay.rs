use flight_hours_api::CancellationPayRule;

use crate::hours::HourTotals;

/// Cancellation pay owed for a period with the given totals
pub fn calculate_cancellation_pay(rule: &CancellationPayRule, totals: &HourTotals) -> f64 {
    match *rule {
        CancellationPayRule::None => 0.0,
        CancellationPayRule::Threshold {
            threshold_hours,
            flat_amount,
        } => {
            if totals.total < threshold_hours {
                flat_amount
            } else {
                0.0
            }
        }
        CancellationPayRule::PerHour { amount } => f64::from(totals.cancellation_hours) * amount,
    }
}
