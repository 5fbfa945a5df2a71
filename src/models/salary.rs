use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_currency() -> String {
    "RUR".to_string()
}

/// Monetary range attached to a vacancy. Both bounds absent collapses to the
/// zero sentinel, which means "unspecified", not a zero-paying job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    pub min_value: Option<u32>,
    pub max_value: Option<u32>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub gross: bool,
}

impl Default for Salary {
    fn default() -> Self {
        Salary::new(None, None, None, false)
    }
}

impl Salary {
    pub fn new(
        min_value: Option<u32>,
        max_value: Option<u32>,
        currency: Option<String>,
        gross: bool,
    ) -> Self {
        if min_value.is_none() && max_value.is_none() {
            return Salary {
                min_value: Some(0),
                max_value: Some(0),
                currency: default_currency(),
                gross,
            };
        }
        Salary {
            min_value,
            max_value,
            currency: currency.unwrap_or_else(default_currency),
            gross,
        }
    }

    /// Build from the API's salary sub-object, keyed `from`/`to`/`currency`/
    /// `gross`. A missing or null sub-object yields the sentinel.
    pub fn from_api(raw: Option<&Value>) -> Self {
        let Some(raw) = raw.filter(|v| !v.is_null()) else {
            return Salary::default();
        };
        Salary::new(
            raw.get("from").and_then(Value::as_u64).map(|v| v as u32),
            raw.get("to").and_then(Value::as_u64).map(|v| v as u32),
            raw.get("currency").and_then(Value::as_str).map(String::from),
            raw.get("gross").and_then(Value::as_bool).unwrap_or(false),
        )
    }

    pub fn is_unspecified(&self) -> bool {
        self.min_value == Some(0) && self.max_value == Some(0)
    }

    /// A bound counts as present only when it is a positive amount.
    fn present(bound: Option<u32>) -> Option<u32> {
        bound.filter(|v| *v > 0)
    }

    /// Strictly less by `min_value`. When either side's minimum is absent or
    /// zero the answer is `false`, so this is asymmetric and not a total
    /// order; callers must tolerate that rather than expect `PartialOrd`.
    pub fn is_below(&self, other: &Salary) -> bool {
        match (Self::present(self.min_value), Self::present(other.min_value)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// True iff at least one present bound falls within `[lo, hi]` inclusive.
    /// Overlap semantics, not containment: with both bounds present, either
    /// one landing in the range is enough. The sentinel is never in range.
    pub fn in_range(&self, lo: u32, hi: u32) -> bool {
        if self.is_unspecified() {
            return false;
        }
        match (Self::present(self.min_value), Self::present(self.max_value)) {
            (Some(min), Some(max)) => (lo..=hi).contains(&min) || (lo..=hi).contains(&max),
            (Some(min), None) => (lo..=hi).contains(&min),
            (None, Some(max)) => (lo..=hi).contains(&max),
            (None, None) => false,
        }
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (Self::present(self.min_value), Self::present(self.max_value)) {
            (Some(min), Some(max)) => write!(f, "от {min} до {max} {}", self.currency),
            (Some(min), None) => write!(f, "от {min} {}", self.currency),
            (None, Some(max)) => write!(f, "до {max} {}", self.currency),
            (None, None) => write!(f, "Зарплата не указана"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn both_bounds_absent_becomes_sentinel() {
        let s = Salary::new(None, None, Some("USD".to_string()), true);
        assert_eq!(s.min_value, Some(0));
        assert_eq!(s.max_value, Some(0));
        assert_eq!(s.currency, "RUR");
        assert!(s.is_unspecified());
    }

    #[test]
    fn from_api_reads_from_to_keys() {
        let raw = json!({"from": 100000, "to": 150000, "currency": "RUR", "gross": true});
        let s = Salary::from_api(Some(&raw));
        assert_eq!(s.min_value, Some(100000));
        assert_eq!(s.max_value, Some(150000));
        assert!(s.gross);
    }

    #[test]
    fn from_api_null_is_sentinel() {
        assert!(Salary::from_api(Some(&Value::Null)).is_unspecified());
        assert!(Salary::from_api(None).is_unspecified());
    }

    #[test]
    fn display_forms() {
        let both = Salary::new(Some(100000), Some(150000), None, false);
        assert_eq!(both.to_string(), "от 100000 до 150000 RUR");

        let from_only = Salary::new(Some(100000), None, Some("EUR".to_string()), false);
        assert_eq!(from_only.to_string(), "от 100000 EUR");

        let to_only = Salary::new(None, Some(150000), None, false);
        assert_eq!(to_only.to_string(), "до 150000 RUR");

        assert_eq!(Salary::default().to_string(), "Зарплата не указана");
    }

    #[test]
    fn in_range_is_overlap_not_containment() {
        // 140000 lands inside the range even though 90000 does not
        let s = Salary::new(Some(90000), Some(140000), None, false);
        assert!(s.in_range(100000, 150000));
        // neither bound inside
        assert!(!s.in_range(150000, 200000));
    }

    #[test]
    fn in_range_single_bound() {
        let from_only = Salary::new(Some(120000), None, None, false);
        assert!(from_only.in_range(100000, 150000));
        assert!(!from_only.in_range(130000, 150000));

        let to_only = Salary::new(None, Some(120000), None, false);
        assert!(to_only.in_range(100000, 150000));
    }

    #[test]
    fn sentinel_is_never_in_range() {
        assert!(!Salary::default().in_range(0, 1_000_000));
    }

    // Pins the inherited asymmetric ordering: an absent or zero minimum never
    // compares below anything, on either side.
    #[test]
    fn is_below_is_asymmetric_on_absent_minimum() {
        let low = Salary::new(Some(50000), None, None, false);
        let high = Salary::new(Some(100000), None, None, false);
        let unspecified = Salary::default();
        let to_only = Salary::new(None, Some(200000), None, false);

        assert!(low.is_below(&high));
        assert!(!high.is_below(&low));
        assert!(!unspecified.is_below(&high));
        assert!(!high.is_below(&unspecified));
        assert!(!to_only.is_below(&high));
        assert!(!high.is_below(&to_only));
    }
}
