use flight_hours_api::{ApiError, ApiResult, FlightEntryDraft, RateTier};
use flight_hours_db::models::FlightEntryModel;
use serde::Serialize;

use super::calculate_pay::calculate_pay;
use crate::hours::HourTotals;

/// Several days normalized together, with what they would earn on their own
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkEntryPreview {
    pub entries: Vec<FlightEntryModel>,
    pub totals: HourTotals,
    pub estimated_pay: f64,
}

/// Normalizes every draft; the first invalid draft fails the whole batch.
pub fn preview_bulk_entries(
    drafts: &[FlightEntryDraft],
    tiers: &[RateTier],
) -> ApiResult<BulkEntryPreview> {
    let entries = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            FlightEntryModel::try_from_draft(draft).map_err(|err| {
                ApiError::ValidationError(format!("Entry {}: {err}", index + 1))
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;

    let totals = HourTotals::from_entries(&entries);
    let estimated_pay = calculate_pay(totals.total, tiers);
    Ok(BulkEntryPreview {
        entries,
        totals,
        estimated_pay,
    })
}
