//! Closed enumerations selecting the index variant.

use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Which pair of traversal directions defines a common friend `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitivityType {
    /// i → k, j → k
    #[serde(rename = "type_1")]
    Type1,
    /// i → k, k → j
    #[serde(rename = "type_2")]
    Type2,
    /// k → i, j → k
    #[serde(rename = "type_3")]
    Type3,
    /// k → i, k → j
    #[serde(rename = "type_4")]
    Type4,
}

impl TransitivityType {
    pub const ALL: [TransitivityType; 4] = [Self::Type1, Self::Type2, Self::Type3, Self::Type4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type1 => "type_1",
            Self::Type2 => "type_2",
            Self::Type3 => "type_3",
            Self::Type4 => "type_4",
        }
    }
}

impl std::fmt::Display for TransitivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitivityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type_1" => Ok(Self::Type1),
            "type_2" => Ok(Self::Type2),
            "type_3" => Ok(Self::Type3),
            "type_4" => Ok(Self::Type4),
            other => Err(Error::UnknownType(format!("transitivity type '{other}'"))),
        }
    }
}

/// Reciprocity class of user i's close friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// i → k and k → i
    Mutual,
    /// i → k, k does not follow back
    OnesidedFrom,
    /// k → i, i does not follow back
    OnesidedTo,
}

impl RelationType {
    pub const ALL: [RelationType; 3] = [Self::Mutual, Self::OnesidedFrom, Self::OnesidedTo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutual => "mutual",
            Self::OnesidedFrom => "onesided_from",
            Self::OnesidedTo => "onesided_to",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutual" => Ok(Self::Mutual),
            "onesided_from" => Ok(Self::OnesidedFrom),
            "onesided_to" => Ok(Self::OnesidedTo),
            other => Err(Error::UnknownType(format!("relation type '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for t in TransitivityType::ALL {
            assert_eq!(t.to_string().parse::<TransitivityType>().unwrap(), t);
        }
        for r in RelationType::ALL {
            assert_eq!(r.to_string().parse::<RelationType>().unwrap(), r);
        }
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert!("type_5".parse::<TransitivityType>().is_err());
        assert!("murual".parse::<RelationType>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        assert_eq!(serde_json::to_string(&TransitivityType::Type3).unwrap(), "\"type_3\"");
        assert_eq!(serde_json::to_string(&RelationType::OnesidedFrom).unwrap(), "\"onesided_from\"");
    }
}
