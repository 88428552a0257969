use serde::{Deserialize, Serialize};
use validator::Validate;

/// One day of hours as typed into the entry form. Numeric fields are raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FlightEntryDraft {
    /// `YYYY-MM-DD`
    pub date: String,
    pub flight: String,
    pub prepost: String,
    pub ground: String,
    pub cancellations: String,
    pub off: bool,
    #[validate(length(max = 500))]
    pub notes: String,
}

impl FlightEntryDraft {
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Default::default()
        }
    }
}
