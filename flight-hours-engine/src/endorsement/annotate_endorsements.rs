use chrono::NaiveDate;
use flight_hours_api::{ClassifierConfig, EndorsementStatus};
use flight_hours_db::models::{EndorsementRecordModel, EndorsementTemplateModel};
use serde::Serialize;
use tracing::warn;

use super::classify_status::{classify_status, days_until_expiration};
use super::compute_expiration::expiration_for;
use super::template_index::TemplateIndex;

/// A record joined with its template and its derived lifecycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedEndorsement<'a> {
    pub record: &'a EndorsementRecordModel,
    pub template: &'a EndorsementTemplateModel,
    pub expiration: Option<NaiveDate>,
    pub status: EndorsementStatus,
    /// Negative once expired; `None` for endorsements that never expire
    pub days_until_expiration: Option<i64>,
}

/// Annotates every record whose template exists, in input order.
pub fn annotate_endorsements<'a>(
    records: &'a [EndorsementRecordModel],
    templates: &'a [EndorsementTemplateModel],
    today: NaiveDate,
    config: &ClassifierConfig,
) -> Vec<AnnotatedEndorsement<'a>> {
    let index = TemplateIndex::new(templates);
    records
        .iter()
        .filter_map(|record| {
            let Some(template) = index.resolve(record) else {
                warn!(record_id = %record.id, "Skipping endorsement with unknown template");
                return None;
            };
            let expiration = expiration_for(record, template);
            Some(AnnotatedEndorsement {
                record,
                template,
                expiration,
                status: classify_status(expiration, today, config.expiring_soon_threshold_days),
                days_until_expiration: expiration.map(|date| days_until_expiration(date, today)),
            })
        })
        .collect()
}
