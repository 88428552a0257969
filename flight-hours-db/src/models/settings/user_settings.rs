use flight_hours_api::{ApiResult, CancellationPayRule, RateTier};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

use super::pay_block::PayBlockModel;
use super::weekly_off_days::{Weekday, WeeklyOffDaysModel};
use crate::utils::{deserialize_lenient_number, lenient_number, parse_date};

const CANCELLATION_NONE: &str = "none";
const CANCELLATION_THRESHOLD: &str = "threshold";
const CANCELLATION_PER_HOUR: &str = "perHour";

/// Per-account settings with every default already applied.
///
/// Built once from the stored [`UserSettingsDocument`]; callers read typed
/// fields and never re-derive fallbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserSettingsDocument", into = "UserSettingsDocument")]
pub struct UserSettingsModel {
    /// Empty until a pay structure has been saved
    pub pay_blocks: Vec<RateTier>,
    pub school_pay_structure: bool,
    pub school_name: HeaplessString<100>,
    pub cancellation_pay: CancellationPayRule,
    pub weekly_off_days: WeeklyOffDaysModel,
    /// Goal in qualifying hours for any month without its own goal
    pub monthly_goal: Option<f64>,
    /// Per calendar month, January first
    pub monthly_goals: [Option<f64>; 12],
}

impl Default for UserSettingsModel {
    fn default() -> Self {
        Self {
            pay_blocks: Vec::new(),
            school_pay_structure: false,
            school_name: HeaplessString::new(),
            cancellation_pay: CancellationPayRule::None,
            weekly_off_days: WeeklyOffDaysModel::default(),
            monthly_goal: None,
            monthly_goals: [None; 12],
        }
    }
}

impl UserSettingsModel {
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_document(document: Value) -> ApiResult<Self> {
        Ok(serde_json::from_value(document)?)
    }

    /// Starter pay structure offered before the user configures their own
    pub fn default_pay_blocks() -> Vec<RateTier> {
        vec![
            RateTier::new(0.0, 20.0, 21.0),
            RateTier::new(20.0, 30.0, 23.0),
            RateTier::new(30.0, 40.0, 26.0),
            RateTier::new(40.0, 50.0, 29.0),
            RateTier::new(50.0, 60.0, 31.0),
            RateTier::new(60.0, 70.0, 34.0),
            RateTier::new(70.0, 85.0, 37.0),
            RateTier::new(85.0, 100.0, 41.0),
            RateTier::new(100.0, 9999.0, 41.0),
        ]
    }

    pub fn has_pay_structure(&self) -> bool {
        !self.pay_blocks.is_empty()
    }

    /// Goal for a calendar month (1 = January). The month's own goal wins over
    /// the general monthly goal.
    pub fn goal_for_month(&self, month: u32) -> Option<f64> {
        let own = match month {
            1..=12 => self.monthly_goals[(month - 1) as usize],
            _ => None,
        };
        own.or(self.monthly_goal)
    }
}

/// Settings exactly as the account document stores them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettingsDocument {
    pub pay_blocks: Option<Vec<PayBlockModel>>,
    pub school_pay_structure: Option<bool>,
    pub school_name: Option<String>,
    pub cancellation_pay_type: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub cancellation_threshold: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub cancellation_flat_amount: Option<f64>,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub cancellation_per_hour: Option<f64>,
    pub weekly_off_days: Option<Vec<String>>,
    pub off_days_effective_date: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub monthly_goal: Option<f64>,
    pub monthly_goals: Option<Vec<Value>>,
}

impl From<UserSettingsDocument> for UserSettingsModel {
    fn from(document: UserSettingsDocument) -> Self {
        let pay_blocks = document
            .pay_blocks
            .unwrap_or_default()
            .iter()
            .map(PayBlockModel::to_rate_tier)
            .collect();

        let cancellation_pay = cancellation_rule(
            document.cancellation_pay_type.as_deref(),
            document.cancellation_threshold,
            document.cancellation_flat_amount,
            document.cancellation_per_hour,
        );

        let days = document
            .weekly_off_days
            .unwrap_or_default()
            .iter()
            .filter_map(|name| match Weekday::from_str(name) {
                Ok(day) => Some(day),
                Err(()) => {
                    warn!(day = %name, "Ignoring unknown weekly off day");
                    None
                }
            })
            .collect();
        let effective_date = document
            .off_days_effective_date
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| match parse_date(value) {
                Ok(date) => Some(date),
                Err(err) => {
                    warn!(error = %err, "Ignoring off days effective date");
                    None
                }
            });

        let mut monthly_goals = [None; 12];
        for (slot, value) in monthly_goals
            .iter_mut()
            .zip(document.monthly_goals.unwrap_or_default().iter())
        {
            *slot = positive_goal(lenient_number(value));
        }

        Self {
            pay_blocks,
            school_pay_structure: document.school_pay_structure.unwrap_or(false),
            school_name: truncated(document.school_name.as_deref().unwrap_or_default()),
            cancellation_pay,
            weekly_off_days: WeeklyOffDaysModel {
                days,
                effective_date,
            },
            monthly_goal: positive_goal(document.monthly_goal),
            monthly_goals,
        }
    }
}

impl From<UserSettingsModel> for UserSettingsDocument {
    fn from(settings: UserSettingsModel) -> Self {
        let (cancellation_pay_type, threshold, flat_amount, per_hour) =
            match settings.cancellation_pay {
                CancellationPayRule::None => (CANCELLATION_NONE, None, None, None),
                CancellationPayRule::Threshold {
                    threshold_hours,
                    flat_amount,
                } => (
                    CANCELLATION_THRESHOLD,
                    Some(threshold_hours),
                    Some(flat_amount),
                    None,
                ),
                CancellationPayRule::PerHour { amount } => {
                    (CANCELLATION_PER_HOUR, None, None, Some(amount))
                }
            };

        Self {
            pay_blocks: Some(settings.pay_blocks.iter().map(PayBlockModel::from).collect()),
            school_pay_structure: Some(settings.school_pay_structure),
            school_name: Some(settings.school_name.as_str().to_string()),
            cancellation_pay_type: Some(cancellation_pay_type.to_string()),
            cancellation_threshold: threshold,
            cancellation_flat_amount: flat_amount,
            cancellation_per_hour: per_hour,
            weekly_off_days: Some(
                settings
                    .weekly_off_days
                    .days
                    .iter()
                    .map(Weekday::to_string)
                    .collect(),
            ),
            off_days_effective_date: settings
                .weekly_off_days
                .effective_date
                .map(|date| date.to_string()),
            monthly_goal: settings.monthly_goal,
            monthly_goals: Some(
                settings
                    .monthly_goals
                    .iter()
                    .map(|goal| goal.map(Value::from).unwrap_or(Value::Null))
                    .collect(),
            ),
        }
    }
}

fn cancellation_rule(
    pay_type: Option<&str>,
    threshold: Option<f64>,
    flat_amount: Option<f64>,
    per_hour: Option<f64>,
) -> CancellationPayRule {
    match pay_type.unwrap_or(CANCELLATION_NONE) {
        CANCELLATION_NONE | "" => CancellationPayRule::None,
        CANCELLATION_THRESHOLD => match (threshold, flat_amount) {
            (Some(threshold_hours), Some(flat_amount)) => CancellationPayRule::Threshold {
                threshold_hours,
                flat_amount,
            },
            _ => {
                warn!("Threshold cancellation pay is missing its threshold or amount");
                CancellationPayRule::None
            }
        },
        CANCELLATION_PER_HOUR => match per_hour {
            Some(amount) => CancellationPayRule::PerHour { amount },
            None => {
                warn!("Per hour cancellation pay is missing its amount");
                CancellationPayRule::None
            }
        },
        other => {
            warn!(pay_type = %other, "Unknown cancellation pay type");
            CancellationPayRule::None
        }
    }
}

/// Zero or negative goals mean no goal
fn positive_goal(goal: Option<f64>) -> Option<f64> {
    goal.filter(|goal| *goal > 0.0)
}

fn truncated<const N: usize>(value: &str) -> HeaplessString<N> {
    let mut bounded = HeaplessString::new();
    for ch in value.chars() {
        if bounded.push(ch).is_err() {
            warn!(max = N, "Truncating settings text");
            break;
        }
    }
    bounded
}
