use chrono::NaiveDate;
use flight_hours_api::{ApiError, ApiResult, EndorsementRecordDraft};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::identifiable::Identifiable;
use crate::utils::{parse_date, to_heapless, to_optional_heapless};

/// One template granted to one student on one date. Expiration is derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndorsementRecordModel {
    pub id: Uuid,
    /// References EndorsementTemplateModel.id
    pub template_id: Uuid,
    pub student_name: HeaplessString<100>,
    #[serde(default)]
    pub student_id: Option<HeaplessString<50>>,
    pub date_given: NaiveDate,
    #[serde(default)]
    pub notes: Option<HeaplessString<500>>,
}

impl EndorsementRecordModel {
    pub fn try_from_draft(id: Uuid, draft: &EndorsementRecordDraft) -> ApiResult<Self> {
        draft.validate()?;
        let template_id = draft
            .template_id
            .ok_or_else(|| ApiError::ValidationError("template_id is required".to_string()))?;
        Ok(Self {
            id,
            template_id,
            student_name: to_heapless(draft.student_name.trim(), "student_name")?,
            student_id: to_optional_heapless(&draft.student_id, "student_id")?,
            date_given: parse_date(&draft.date_given)?,
            notes: to_optional_heapless(&draft.notes, "notes")?,
        })
    }
}

impl Identifiable for EndorsementRecordModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_draft() {
        let template_id = Uuid::new_v4();
        let draft = EndorsementRecordDraft {
            template_id: Some(template_id),
            student_name: " Avery Chen ".to_string(),
            student_id: "".to_string(),
            date_given: "2024-01-31".to_string(),
            notes: "Checkride prep".to_string(),
        };
        let record = EndorsementRecordModel::try_from_draft(Uuid::new_v4(), &draft).unwrap();
        assert_eq!(record.template_id, template_id);
        assert_eq!(record.student_name.as_str(), "Avery Chen");
        assert_eq!(record.student_id, None);
        assert_eq!(record.date_given, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_malformed_date_given_is_rejected() {
        let draft = EndorsementRecordDraft {
            template_id: Some(Uuid::new_v4()),
            student_name: "Avery Chen".to_string(),
            date_given: "2024-02-30".to_string(),
            ..Default::default()
        };
        let err = EndorsementRecordModel::try_from_draft(Uuid::new_v4(), &draft).unwrap_err();
        assert!(matches!(err, ApiError::InvalidDate(_)));
    }
}
