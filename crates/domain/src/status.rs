//! Soft-delete marker shared by every stored record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logical lifecycle of a record.
///
/// Records are never physically removed; deleting one moves it from
/// [`Live`](Self::Live) to [`Deleted`](Self::Deleted). There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DelStatus {
    #[default]
    Live,
    Deleted,
}

impl DelStatus {
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for DelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored status string is neither `Live` nor `Deleted`.
#[derive(Debug, thiserror::Error)]
#[error("unknown del_status {0:?}")]
pub struct UnknownDelStatus(String);

impl FromStr for DelStatus {
    type Err = UnknownDelStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(Self::Live),
            "Deleted" => Ok(Self::Deleted),
            other => Err(UnknownDelStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_live() {
        assert_eq!(DelStatus::default(), DelStatus::Live);
        assert!(DelStatus::default().is_live());
    }

    #[test]
    fn should_report_not_live_when_deleted() {
        assert!(!DelStatus::Deleted.is_live());
    }

    #[test]
    fn should_serialize_with_capitalized_variant_name() {
        let json = serde_json::to_string(&DelStatus::Deleted).unwrap();
        assert_eq!(json, "\"Deleted\"");
    }

    #[test]
    fn should_parse_stored_representation() {
        assert_eq!("Live".parse::<DelStatus>().unwrap(), DelStatus::Live);
        assert_eq!(DelStatus::Deleted.to_string(), "Deleted");
    }

    #[test]
    fn should_reject_lowercase_status() {
        assert!("live".parse::<DelStatus>().is_err());
    }
}
