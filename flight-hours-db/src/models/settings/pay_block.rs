use flight_hours_api::RateTier;
use serde::{Deserialize, Serialize};

use crate::utils::deserialize_lenient_number;

/// Pay block as stored in the settings document.
///
/// Bounds and rate may have been saved as numbers or as text. A value that
/// cannot be read as a number becomes NaN in the resulting [`RateTier`],
/// which the pay calculation skips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayBlockModel {
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub start: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub end: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub rate: Option<f64>,
}

impl PayBlockModel {
    pub fn to_rate_tier(&self) -> RateTier {
        RateTier::new(
            self.start.unwrap_or(f64::NAN),
            self.end.unwrap_or(f64::NAN),
            self.rate.unwrap_or(f64::NAN),
        )
    }
}

impl From<&RateTier> for PayBlockModel {
    fn from(tier: &RateTier) -> Self {
        Self {
            start: Some(tier.start),
            end: Some(tier.end),
            rate: Some(tier.rate),
        }
    }
}
