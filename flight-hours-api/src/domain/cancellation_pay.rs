use serde::{Deserialize, Serialize};

/// How cancelled lessons are compensated for a month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CancellationPayRule {
    #[default]
    None,
    /// Flat bonus when the month's qualifying hours stay under the threshold.
    #[serde(rename_all = "camelCase")]
    Threshold { threshold_hours: f64, flat_amount: f64 },
    /// Fixed amount for every logged cancellation hour.
    PerHour { amount: f64 },
}

impl CancellationPayRule {
    /// Label shown next to a non-zero cancellation payment
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CancellationPayRule::None => None,
            CancellationPayRule::Threshold { .. } => Some("Threshold Bonus"),
            CancellationPayRule::PerHour { .. } => Some("Per Hour Rate"),
        }
    }
}
