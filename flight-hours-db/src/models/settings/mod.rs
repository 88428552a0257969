pub mod pay_block;
pub mod weekly_off_days;
pub mod user_settings;

pub use pay_block::PayBlockModel;
pub use weekly_off_days::{Weekday, WeeklyOffDaysModel};
pub use user_settings::{UserSettingsDocument, UserSettingsModel};
