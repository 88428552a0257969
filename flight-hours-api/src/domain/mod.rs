pub mod rate_tier;
pub mod duration_unit;
pub mod endorsement_status;
pub mod cancellation_pay;
pub mod classifier_config;
pub mod endorsement_draft;
pub mod flight_entry_draft;

pub use rate_tier::RateTier;
pub use duration_unit::DurationUnit;
pub use endorsement_status::{EndorsementStatus, StatusFilter};
pub use cancellation_pay::CancellationPayRule;
pub use classifier_config::ClassifierConfig;
pub use endorsement_draft::{EndorsementRecordDraft, EndorsementTemplateDraft};
pub use flight_entry_draft::FlightEntryDraft;
