use flight_hours_api::RateTier;
use tracing::debug;

/// Estimated pay for `total_hours` under a tiered pay structure.
///
/// Hours fill the tiers strictly in the order given. Each tier absorbs at
/// most `end - start` hours at its rate; the bounds themselves are never
/// compared against the running total. Hours left over once every tier is
/// full are not paid.
///
/// Returns `0.0` for an empty structure or a NaN total. Tiers with a NaN
/// bound or rate are skipped without absorbing any hours. An infinite `end`
/// makes an open-ended top tier.
///
/// # Example
/// ```
/// use flight_hours_api::RateTier;
/// use flight_hours_engine::calculate_pay;
///
/// let tiers = [
///     RateTier::new(0.0, 20.0, 21.0),
///     RateTier::new(20.0, 30.0, 23.0),
///     RateTier::new(30.0, 9999.0, 26.0),
/// ];
/// assert_eq!(calculate_pay(25.0, &tiers), 535.0);
/// ```
pub fn calculate_pay(total_hours: f64, tiers: &[RateTier]) -> f64 {
    if tiers.is_empty() || total_hours.is_nan() {
        return 0.0;
    }
    if tiers.windows(2).any(|pair| pair[1].start < pair[0].start) {
        debug!(tiers = tiers.len(), "Pay tiers are not in ascending start order");
    }

    let mut pay = 0.0;
    let mut hours_left = total_hours;
    for tier in tiers {
        if hours_left <= 0.0 {
            break;
        }
        if !tier.is_well_formed() {
            debug!(?tier, "Skipping malformed pay tier");
            continue;
        }
        let hours_in_tier = hours_left.min(tier.capacity()).max(0.0);
        if hours_in_tier > 0.0 {
            pay += hours_in_tier * tier.rate;
        }
        hours_left -= hours_in_tier;
    }
    pay
}
