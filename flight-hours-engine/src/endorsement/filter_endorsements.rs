use chrono::NaiveDate;
use flight_hours_api::{ClassifierConfig, Clock, StatusFilter};
use flight_hours_db::models::{EndorsementRecordModel, EndorsementTemplateModel};
use uuid::Uuid;
use tracing::warn;

use super::classify_status::classify_status;
use super::compute_expiration::expiration_for;
use super::template_index::TemplateIndex;

/// Criteria of the endorsement listing. All criteria must hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndorsementFilter {
    pub status: StatusFilter,
    /// Case-insensitive substring of the student name; empty matches everyone.
    /// Whitespace is part of the query.
    pub student_name: String,
    pub template_id: Option<Uuid>,
    pub expiring_soon_threshold_days: u32,
}

impl Default for EndorsementFilter {
    fn default() -> Self {
        Self::with_config(&ClassifierConfig::default())
    }
}

impl EndorsementFilter {
    pub fn with_config(config: &ClassifierConfig) -> Self {
        Self {
            status: StatusFilter::All,
            student_name: String::new(),
            template_id: None,
            expiring_soon_threshold_days: config.expiring_soon_threshold_days,
        }
    }

    /// Filters as of the clock's current date
    pub fn apply<'a>(
        &self,
        records: &'a [EndorsementRecordModel],
        templates: &[EndorsementTemplateModel],
        clock: &dyn Clock,
    ) -> Vec<&'a EndorsementRecordModel> {
        filter_endorsements(records, templates, self, clock.today())
    }
}

/// Records passing `filter` as of `today`, in input order.
///
/// Records whose template cannot be found are never returned.
pub fn filter_endorsements<'a>(
    records: &'a [EndorsementRecordModel],
    templates: &[EndorsementTemplateModel],
    filter: &EndorsementFilter,
    today: NaiveDate,
) -> Vec<&'a EndorsementRecordModel> {
    let index = TemplateIndex::new(templates);
    let student_name = filter.student_name.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let Some(template) = index.resolve(record) else {
                warn!(
                    record_id = %record.id,
                    template_id = %record.template_id,
                    "Skipping endorsement with unknown template"
                );
                return false;
            };
            if !student_name.is_empty()
                && !record.student_name.to_lowercase().contains(&student_name)
            {
                return false;
            }
            if filter.template_id.is_some_and(|id| id != record.template_id) {
                return false;
            }
            let status = classify_status(
                expiration_for(record, template),
                today,
                filter.expiring_soon_threshold_days,
            );
            filter.status.admits(status)
        })
        .collect()
}
