//! Count normalization

use serde::{Deserialize, Serialize};
use std::ops::Add;
use tracing::warn;

/// Share of a corpus, in percent
///
/// A zero denominator has no meaningful rate and yields `Undefined`, which
/// serializes as `null` so it can't be mistaken for a true zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Percentage {
    Defined(f64),
    Undefined,
}

impl Percentage {
    /// `count * 100 / total`
    pub fn of(count: u64, total: u64) -> Self {
        if total == 0 {
            warn!("Cannot normalize count {} against an empty denominator", count);
            return Percentage::Undefined;
        }

        Percentage::Defined(count as f64 * 100.0 / total as f64)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Percentage::Defined(value) => Some(*value),
            Percentage::Undefined => None,
        }
    }

    /// Value at the one-decimal precision reports use
    pub fn rounded(&self) -> Option<f64> {
        self.value().map(|value| (value * 10.0).round() / 10.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::Defined(0.0)
    }
}

impl Add for Percentage {
    type Output = Percentage;

    fn add(self, rhs: Percentage) -> Percentage {
        match (self, rhs) {
            (Percentage::Defined(a), Percentage::Defined(b)) => Percentage::Defined(a + b),
            _ => Percentage::Undefined,
        }
    }
}

impl From<Option<f64>> for Percentage {
    fn from(value: Option<f64>) -> Self {
        value.map(Percentage::Defined).unwrap_or(Percentage::Undefined)
    }
}

impl From<Percentage> for Option<f64> {
    fn from(value: Percentage) -> Self {
        value.rounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Percentage::of(0, 7), Percentage::Defined(0.0));
        assert_eq!(Percentage::of(7, 7), Percentage::Defined(100.0));
        assert_eq!(Percentage::of(3, 10), Percentage::Defined(30.0));
    }

    #[test]
    fn test_zero_denominator_is_undefined() {
        assert_eq!(Percentage::of(0, 0), Percentage::Undefined);
        assert_eq!(Percentage::of(4, 0).value(), None);
    }

    #[test]
    fn test_serialization_rounds_to_one_decimal() {
        let json = serde_json::to_string(&Percentage::of(1, 3)).unwrap();
        assert_eq!(json, "33.3");

        let json = serde_json::to_string(&Percentage::Undefined).unwrap();
        assert_eq!(json, "null");

        let parsed: Percentage = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Percentage::Undefined);
    }

    #[test]
    fn test_sum_propagates_undefined() {
        let sum = Percentage::of(1, 4) + Percentage::of(1, 4);
        assert_eq!(sum, Percentage::Defined(50.0));
        assert_eq!(sum + Percentage::Undefined, Percentage::Undefined);
    }
}
