//! Coxeter matrix entries, diagram edge labels, and index labels.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::{CoxeterError, CoxeterResult};

/// Entry of a Coxeter matrix: the order of the product of two generators.
///
/// `Finite(1)` only appears on the diagonal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoxeterLabel {
    /// Finite order `m ≥ 1`.
    Finite(u32),
    /// Infinite order.
    Infinity,
}
impl fmt::Display for CoxeterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_int())
    }
}
impl Serialize for CoxeterLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_int())
    }
}
impl CoxeterLabel {
    /// Integer used for [`CoxeterLabel::Infinity`] in integer matrices.
    pub const INFINITY_SENTINEL: i64 = -1;

    /// Label of commuting generators.
    pub const COMMUTING: Self = Self::Finite(2);
    /// Label of the diagonal.
    pub const DIAGONAL: Self = Self::Finite(1);

    /// Converts an integer matrix entry to a label. Returns `None` for
    /// integers that are neither positive nor the infinity sentinel.
    pub fn from_int(n: i64) -> Option<Self> {
        if n == Self::INFINITY_SENTINEL {
            Some(Self::Infinity)
        } else {
            u32::try_from(n).ok().filter(|&m| m >= 1).map(Self::Finite)
        }
    }
    /// Returns the label as an integer, using the infinity sentinel.
    pub fn as_int(self) -> i64 {
        match self {
            Self::Finite(m) => m as i64,
            Self::Infinity => Self::INFINITY_SENTINEL,
        }
    }

    /// Returns whether the label is infinite.
    pub fn is_infinite(self) -> bool {
        self == Self::Infinity
    }
    /// Returns whether an off-diagonal entry with this label puts an edge in
    /// the Coxeter diagram.
    pub fn is_edge(self) -> bool {
        !matches!(self, Self::Finite(1 | 2))
    }
    /// Returns the diagram edge label for an off-diagonal entry.
    pub fn edge_label(self) -> EdgeLabel {
        match self {
            Self::Finite(0..=2) => EdgeLabel::Absent,
            Self::Finite(3) => EdgeLabel::Default,
            Self::Finite(m) => EdgeLabel::Value(m),
            Self::Infinity => EdgeLabel::Infinite,
        }
    }
}

/// Label of an edge in a Coxeter diagram.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// No edge; the generators commute.
    Absent,
    /// Unlabeled edge, meaning 3.
    Default,
    /// Explicitly labeled edge.
    Value(u32),
    /// Edge labeled `∞`.
    Infinite,
}
impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeLabel::Absent => write!(f, "2"),
            EdgeLabel::Default => write!(f, "None"),
            EdgeLabel::Value(m) => write!(f, "{m}"),
            EdgeLabel::Infinite => write!(f, "+Infinity"),
        }
    }
}
impl FromStr for EdgeLabel {
    type Err = CoxeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "None" => Ok(EdgeLabel::Default),
            "inf" | "oo" | "∞" | "-1" | "+Infinity" => Ok(EdgeLabel::Infinite),
            other => match other.parse::<i64>() {
                Ok(m) if m >= 2 => u32::try_from(m)
                    .map(EdgeLabel::Value)
                    .map_err(|_| CoxeterError::BadGraphLabel(m)),
                Ok(m) => Err(CoxeterError::BadGraphLabel(m)),
                Err(_) => Err(CoxeterError::UnknownGraphLabel(other.to_string())),
            },
        }
    }
}
impl EdgeLabel {
    /// Returns the Coxeter matrix entry for an edge with this label.
    pub fn to_coxeter_label(self) -> CoxeterResult<CoxeterLabel> {
        match self {
            EdgeLabel::Absent => Ok(CoxeterLabel::COMMUTING),
            EdgeLabel::Default => Ok(CoxeterLabel::Finite(3)),
            EdgeLabel::Value(m) if m <= 1 => Err(CoxeterError::BadGraphLabel(m as i64)),
            EdgeLabel::Value(m) => Ok(CoxeterLabel::Finite(m)),
            EdgeLabel::Infinite => Ok(CoxeterLabel::Infinity),
        }
    }
}

/// Label of a generator in an index set.
///
/// Integers sort before strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndexLabel {
    /// Integer label.
    Int(i64),
    /// String label.
    Str(String),
}
impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexLabel::Int(i) => write!(f, "{i}"),
            IndexLabel::Str(s) => write!(f, "'{s}'"),
        }
    }
}
impl Serialize for IndexLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndexLabel::Int(i) => serializer.serialize_i64(*i),
            IndexLabel::Str(s) => serializer.serialize_str(s),
        }
    }
}
impl FromStr for IndexLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse() {
            Ok(i) => IndexLabel::Int(i),
            Err(_) => IndexLabel::Str(s.to_string()),
        })
    }
}
impl From<i64> for IndexLabel {
    fn from(value: i64) -> Self {
        IndexLabel::Int(value)
    }
}
impl From<i32> for IndexLabel {
    fn from(value: i32) -> Self {
        IndexLabel::Int(value.into())
    }
}
impl From<usize> for IndexLabel {
    fn from(value: usize) -> Self {
        IndexLabel::Int(value as i64)
    }
}
impl From<&str> for IndexLabel {
    fn from(value: &str) -> Self {
        IndexLabel::Str(value.to_string())
    }
}
impl From<String> for IndexLabel {
    fn from(value: String) -> Self {
        IndexLabel::Str(value)
    }
}
impl From<char> for IndexLabel {
    fn from(value: char) -> Self {
        IndexLabel::Str(value.to_string())
    }
}

/// Returns the default index set `0..n`.
pub fn default_index_set(n: usize) -> Vec<IndexLabel> {
    (0..n).map(IndexLabel::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coxeter_label_int_conversion() {
        assert_eq!(CoxeterLabel::from_int(-1), Some(CoxeterLabel::Infinity));
        assert_eq!(CoxeterLabel::from_int(4), Some(CoxeterLabel::Finite(4)));
        assert_eq!(CoxeterLabel::from_int(0), None);
        assert_eq!(CoxeterLabel::from_int(-3), None);
        assert_eq!(CoxeterLabel::Infinity.as_int(), -1);
        assert!(CoxeterLabel::Finite(7) < CoxeterLabel::Infinity);
    }

    #[test]
    fn test_edge_labels() {
        assert_eq!(CoxeterLabel::Finite(2).edge_label(), EdgeLabel::Absent);
        assert_eq!(CoxeterLabel::Finite(3).edge_label(), EdgeLabel::Default);
        assert_eq!(CoxeterLabel::Finite(5).edge_label(), EdgeLabel::Value(5));
        assert_eq!(CoxeterLabel::Infinity.edge_label(), EdgeLabel::Infinite);

        assert_eq!("oo".parse::<EdgeLabel>(), Ok(EdgeLabel::Infinite));
        assert_eq!("".parse::<EdgeLabel>(), Ok(EdgeLabel::Default));
        assert_eq!("1".parse::<EdgeLabel>(), Err(CoxeterError::BadGraphLabel(1)));
        assert_eq!("4294967295".parse::<EdgeLabel>(), Ok(EdgeLabel::Value(u32::MAX)));
        assert_eq!(
            "4294967299".parse::<EdgeLabel>(),
            Err(CoxeterError::BadGraphLabel(4294967299)),
        );
        assert_eq!(
            EdgeLabel::Value(0).to_coxeter_label(),
            Err(CoxeterError::BadGraphLabel(0)),
        );
    }

    #[test]
    fn test_index_labels() {
        assert_eq!("3".parse::<IndexLabel>(), Ok(IndexLabel::Int(3)));
        assert_eq!("x".parse::<IndexLabel>(), Ok(IndexLabel::from('x')));
        assert!(IndexLabel::Int(100) < IndexLabel::from("a"));
        assert_eq!(IndexLabel::from("a").to_string(), "'a'");
    }
}
