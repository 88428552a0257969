use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Derived lifecycle state of an endorsement. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndorsementStatus {
    NeverExpires,
    Active,
    ExpiringSoon,
    Expired,
}

impl std::fmt::Display for EndorsementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndorsementStatus::NeverExpires => write!(f, "NeverExpires"),
            EndorsementStatus::Active => write!(f, "Active"),
            EndorsementStatus::ExpiringSoon => write!(f, "ExpiringSoon"),
            EndorsementStatus::Expired => write!(f, "Expired"),
        }
    }
}

/// Status selector of the endorsement listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Expired,
    ExpiringSoon,
}

impl StatusFilter {
    /// Whether a record in the given status passes this filter.
    ///
    /// `Active` keeps everything that has not expired, including records that
    /// are about to expire and records that never expire.
    pub fn admits(&self, status: EndorsementStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status != EndorsementStatus::Expired,
            StatusFilter::Expired => status == EndorsementStatus::Expired,
            StatusFilter::ExpiringSoon => status == EndorsementStatus::ExpiringSoon,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "expired" => Ok(StatusFilter::Expired),
            "expiring-soon" => Ok(StatusFilter::ExpiringSoon),
            _ => Err(()),
        }
    }
}
