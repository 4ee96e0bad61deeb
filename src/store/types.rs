use serde::{Serialize, Deserialize};
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// How a node combines its requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// True once every requirement is true (vacuously true when there are none).
    And,
    /// True once any requirement is true (vacuously false when there are none).
    Or,
}

/// A cost in the nonnegative integers extended with an explicit "unreachable" value.
///
/// Variant order makes every finite cost compare below `Unreachable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cost {
    Finite(u64),
    Unreachable,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    pub fn is_finite(&self) -> bool { matches!(self, Cost::Finite(_)) }

    pub fn value(&self) -> Option<u64> {
        match self {
            Cost::Finite(v) => Some(*v),
            Cost::Unreachable => None,
        }
    }
}

/// Saturates at `u64::MAX` rather than wrapping into a small cost.
impl Add for Cost {
    type Output = Cost;

    fn add(self, other: Cost) -> Cost {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a.saturating_add(b)),
            _ => Cost::Unreachable,
        }
    }
}

impl Default for Cost {
    fn default() -> Self { Cost::Unreachable }
}

impl From<u64> for Cost {
    fn from(v: u64) -> Self { Cost::Finite(v) }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{}", v),
            Cost::Unreachable => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_orders_above_every_finite_cost() {
        assert!(Cost::Finite(u64::MAX) < Cost::Unreachable);
        assert!(Cost::Finite(3) < Cost::Finite(4));
        assert_eq!(Cost::Finite(2).min(Cost::Unreachable), Cost::Finite(2));
    }

    #[test]
    fn test_add_saturates_and_propagates_unreachable() {
        assert_eq!(Cost::Finite(2) + Cost::Finite(3), Cost::Finite(5));
        assert_eq!(Cost::Finite(u64::MAX) + Cost::Finite(1), Cost::Finite(u64::MAX));
        assert_eq!(Cost::Finite(1) + Cost::Unreachable, Cost::Unreachable);
    }
}
