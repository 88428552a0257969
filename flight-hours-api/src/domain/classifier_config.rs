use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS: u32 = 30;

/// Tuning for endorsement status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Look-ahead window, inclusive, in which an endorsement counts as expiring soon
    #[serde(default = "default_threshold")]
    pub expiring_soon_threshold_days: u32,
}

fn default_threshold() -> u32 {
    DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            expiring_soon_threshold_days: DEFAULT_EXPIRING_SOON_THRESHOLD_DAYS,
        }
    }
}
