use flight_hours_api::{ApiResult, DurationUnit, EndorsementTemplateDraft};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::identifiable::Identifiable;
use crate::utils::to_heapless;

/// Reusable endorsement definition with its validity period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementTemplateModel {
    pub id: Uuid,
    pub name: HeaplessString<100>,
    #[serde(default)]
    pub description: HeaplessString<500>,
    /// `None` iff `never_expires`
    pub duration: Option<u32>,
    /// `None` iff `never_expires`
    pub duration_unit: Option<DurationUnit>,
    #[serde(default)]
    pub never_expires: bool,
}

impl EndorsementTemplateModel {
    /// Builds a template from validated form input. Duration fields are
    /// dropped for templates that never expire.
    pub fn try_from_draft(id: Uuid, draft: &EndorsementTemplateDraft) -> ApiResult<Self> {
        draft.validate()?;
        let (duration, duration_unit) = if draft.never_expires {
            (None, None)
        } else {
            (draft.duration, draft.duration_unit)
        };
        Ok(Self {
            id,
            name: to_heapless(draft.name.trim(), "name")?,
            description: to_heapless(draft.description.trim(), "description")?,
            duration,
            duration_unit,
            never_expires: draft.never_expires,
        })
    }
}

impl Identifiable for EndorsementTemplateModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_hours_api::ApiError;

    #[test]
    fn test_try_from_draft_trims_name() {
        let draft = EndorsementTemplateDraft {
            name: "  Flight review  ".to_string(),
            description: String::new(),
            duration: Some(24),
            duration_unit: Some(DurationUnit::Months),
            never_expires: false,
        };
        let template = EndorsementTemplateModel::try_from_draft(Uuid::new_v4(), &draft).unwrap();
        assert_eq!(template.name.as_str(), "Flight review");
        assert_eq!(template.duration, Some(24));
        assert_eq!(template.duration_unit, Some(DurationUnit::Months));
    }

    #[test]
    fn test_never_expiring_template_clears_duration() {
        let draft = EndorsementTemplateDraft {
            name: "Complex aircraft".to_string(),
            description: "61.31(e)".to_string(),
            duration: Some(90),
            duration_unit: Some(DurationUnit::Days),
            never_expires: true,
        };
        let template = EndorsementTemplateModel::try_from_draft(Uuid::new_v4(), &draft).unwrap();
        assert_eq!(template.duration, None);
        assert_eq!(template.duration_unit, None);
        assert!(template.never_expires);
    }

    #[test]
    fn test_invalid_draft_is_rejected() {
        let draft = EndorsementTemplateDraft::default();
        let err = EndorsementTemplateModel::try_from_draft(Uuid::new_v4(), &draft).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_stored_document_round_trips_camel_case() {
        let id = Uuid::new_v4();
        let template: EndorsementTemplateModel = serde_json::from_value(serde_json::json!({
            "id": id,
            "name": "Solo",
            "duration": 90,
            "durationUnit": "days",
            "neverExpires": false
        }))
        .unwrap();
        assert_eq!(template.get_id(), id);
        assert_eq!(template.description.as_str(), "");
        assert_eq!(template.duration_unit, Some(DurationUnit::Days));
    }
}
