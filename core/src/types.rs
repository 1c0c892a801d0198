//! Shared primitive types used across the toolkit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A relative sampling weight. Never negative, never NaN once it has
/// passed validation in [`crate::die::WeightedDie::set_weight`].
pub type Weight = f64;

/// One labeled face of a die.
///
/// A face is either a whole number or a text label; a single die's
/// face set is homogeneous (all `Int` or all `Text`). The two kinds
/// only meet when an analyzer unions the faces of a heterogeneous
/// game, which is why `Face` carries a total order: integers by
/// value, texts lexicographically, all integers before all texts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    Int(i64),
    Text(String),
}

impl Face {
    /// True when `self` and `other` are the same kind of label.
    pub fn same_kind(&self, other: &Face) -> bool {
        matches!(
            (self, other),
            (Face::Int(_), Face::Int(_)) | (Face::Text(_), Face::Text(_))
        )
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Int(n) => write!(f, "{n}"),
            Face::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Face {
    fn from(n: i64) -> Self {
        Face::Int(n)
    }
}

impl From<i32> for Face {
    fn from(n: i32) -> Self {
        Face::Int(n as i64)
    }
}

impl From<&str> for Face {
    fn from(s: &str) -> Self {
        Face::Text(s.to_string())
    }
}

impl From<String> for Face {
    fn from(s: String) -> Self {
        Face::Text(s)
    }
}
