use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::duration_unit::DurationUnit;

/// Template form input before it becomes a persisted template
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_template_draft"))]
pub struct EndorsementTemplateDraft {
    #[validate(length(max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: String,
    pub duration: Option<u32>,
    pub duration_unit: Option<DurationUnit>,
    pub never_expires: bool,
}

fn validate_template_draft(draft: &EndorsementTemplateDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::new("template_name_required"));
    }
    if draft.never_expires {
        return Ok(());
    }
    match (draft.duration, draft.duration_unit) {
        (Some(duration), Some(_)) if duration > 0 => Ok(()),
        _ => Err(ValidationError::new("template_duration_required")),
    }
}

/// Endorsement form input: one template granted to one student
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_record_draft"))]
pub struct EndorsementRecordDraft {
    #[validate(required)]
    pub template_id: Option<Uuid>,
    #[validate(length(max = 100))]
    pub student_name: String,
    #[validate(length(max = 50))]
    pub student_id: String,
    /// `YYYY-MM-DD`
    pub date_given: String,
    #[validate(length(max = 500))]
    pub notes: String,
}

fn validate_record_draft(draft: &EndorsementRecordDraft) -> Result<(), ValidationError> {
    if draft.student_name.trim().is_empty() {
        return Err(ValidationError::new("student_name_required"));
    }
    Ok(())
}
