pub mod identifiable;
pub mod flight_entry;
pub mod endorsement;
pub mod settings;

// Re-exports
pub use identifiable::*;
pub use flight_entry::FlightEntryModel;
pub use endorsement::{EndorsementRecordModel, EndorsementTemplateModel};
pub use settings::{PayBlockModel, UserSettingsModel, Weekday, WeeklyOffDaysModel};
