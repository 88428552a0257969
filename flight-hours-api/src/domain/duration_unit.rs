use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Calendar unit an endorsement validity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Days,
    Months,
    Years,
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationUnit::Days => write!(f, "days"),
            DurationUnit::Months => write!(f, "months"),
            DurationUnit::Years => write!(f, "years"),
        }
    }
}

impl FromStr for DurationUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(DurationUnit::Days),
            "months" => Ok(DurationUnit::Months),
            "years" => Ok(DurationUnit::Years),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_matches_display() {
        for unit in [DurationUnit::Days, DurationUnit::Months, DurationUnit::Years] {
            assert_eq!(DurationUnit::from_str(&unit.to_string()), Ok(unit));
        }
        assert_eq!(DurationUnit::from_str("weeks"), Err(()));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DurationUnit::Months).unwrap();
        assert_eq!(json, "\"months\"");
        let unit: DurationUnit = serde_json::from_str("\"years\"").unwrap();
        assert_eq!(unit, DurationUnit::Years);
    }
}
