use chrono::NaiveDate;
use flight_hours_api::{ApiError, ApiResult, FlightEntryDraft};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::identifiable::Identifiable;
use crate::utils::{parse_date, parse_hours, parse_whole_hours, to_optional_heapless};

/// One logged day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightEntryModel {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub flight: f64,
    #[serde(default)]
    pub prepost: f64,
    #[serde(default)]
    pub ground: f64,
    /// Whole hours of cancelled lessons
    #[serde(default)]
    pub cancellations: u32,
    /// Non-working day; hour fields are zero
    #[serde(default)]
    pub off: bool,
    #[serde(default)]
    pub notes: Option<HeaplessString<500>>,
}

impl FlightEntryModel {
    /// An off day with nothing logged
    pub fn off_day(date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            flight: 0.0,
            prepost: 0.0,
            ground: 0.0,
            cancellations: 0,
            off: true,
            notes: None,
        }
    }

    /// Flight + pre/post + ground. These are the hours the pay structure applies to.
    pub fn qualifying_hours(&self) -> f64 {
        self.flight + self.prepost + self.ground
    }

    /// Normalizes a form submission into a new entry.
    ///
    /// Blank or unreadable numbers count as zero. Marking the day off zeroes
    /// the flight, pre/post and ground hours; cancellations are kept.
    pub fn try_from_draft(draft: &FlightEntryDraft) -> ApiResult<Self> {
        draft.validate()?;
        let date = parse_date(&draft.date)?;

        let (flight, prepost, ground) = if draft.off {
            (0.0, 0.0, 0.0)
        } else {
            (
                parse_hours(&draft.flight),
                parse_hours(&draft.prepost),
                parse_hours(&draft.ground),
            )
        };
        if flight < 0.0 || prepost < 0.0 || ground < 0.0 {
            return Err(ApiError::ValidationError(format!(
                "Hours for {date} must not be negative"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            flight,
            prepost,
            ground,
            cancellations: parse_whole_hours(&draft.cancellations),
            off: draft.off,
            notes: to_optional_heapless(&draft.notes, "notes")?,
        })
    }
}

impl Identifiable for FlightEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> FlightEntryDraft {
        FlightEntryDraft {
            date: "2024-05-14".to_string(),
            flight: "3.2".to_string(),
            prepost: "0.8".to_string(),
            ground: "1".to_string(),
            cancellations: "2".to_string(),
            off: false,
            notes: "Stage check prep".to_string(),
        }
    }

    #[test]
    fn test_try_from_draft_parses_fields() {
        let entry = FlightEntryModel::try_from_draft(&draft()).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 5, 14).unwrap());
        assert_eq!(entry.flight, 3.2);
        assert_eq!(entry.prepost, 0.8);
        assert_eq!(entry.ground, 1.0);
        assert_eq!(entry.cancellations, 2);
        assert_eq!(entry.notes.as_ref().map(|n| n.as_str()), Some("Stage check prep"));
        assert!((entry.qualifying_hours() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_off_day_zeroes_hours_but_keeps_cancellations() {
        let mut off = draft();
        off.off = true;
        let entry = FlightEntryModel::try_from_draft(&off).unwrap();
        assert_eq!(entry.qualifying_hours(), 0.0);
        assert_eq!(entry.cancellations, 2);
        assert!(entry.off);
    }

    #[test]
    fn test_blank_fields_count_as_zero() {
        let entry = FlightEntryModel::try_from_draft(&FlightEntryDraft::for_date("2024-05-14")).unwrap();
        assert_eq!(entry.qualifying_hours(), 0.0);
        assert_eq!(entry.cancellations, 0);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let mut bad = draft();
        bad.date = "May 14".to_string();
        let err = FlightEntryModel::try_from_draft(&bad).unwrap_err();
        assert!(matches!(err, ApiError::InvalidDate(_)));
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let mut bad = draft();
        bad.ground = "-1".to_string();
        let err = FlightEntryModel::try_from_draft(&bad).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(_)));
    }

    #[test]
    fn test_stored_document_defaults_missing_hours() {
        let id = Uuid::new_v4();
        let entry: FlightEntryModel = serde_json::from_value(json!({
            "id": id,
            "date": "2024-05-14",
            "flight": 2.0
        }))
        .unwrap();
        assert_eq!(entry.get_id(), id);
        assert_eq!(entry.prepost, 0.0);
        assert_eq!(entry.ground, 0.0);
        assert!(!entry.off);
        assert_eq!(entry.qualifying_hours(), 2.0);
    }
}
