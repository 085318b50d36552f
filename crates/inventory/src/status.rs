use core::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// Qualitative stock level derived from `stock / max_stock`.
///
/// - `Low`: ratio < 0.20
/// - `Medium`: 0.20 <= ratio < 0.50
/// - `High`: ratio >= 0.50
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Medium,
    High,
}

impl StockStatus {
    /// Classify a stock level against its capacity baseline.
    ///
    /// Compares in integers (`5 * stock < max`, `2 * stock < max`) so ratios of
    /// exactly 0.20 and 0.50 land in the upper bucket without rounding drift.
    pub fn classify(stock: u64, max_stock: NonZeroU64) -> Self {
        let stock = u128::from(stock);
        let max = u128::from(max_stock.get());

        if stock * 5 < max {
            StockStatus::Low
        } else if stock * 2 < max {
            StockStatus::Medium
        } else {
            StockStatus::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Low => "low",
            StockStatus::Medium => "medium",
            StockStatus::High => "high",
        }
    }

    /// Badge text shown on product cards.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "LOW",
            StockStatus::Medium => "MEDIUM",
            StockStatus::High => "HIGH",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn boundaries_fall_into_upper_bucket() {
        // 20 / 100 = 0.20 exactly
        assert_eq!(StockStatus::classify(20, max(100)), StockStatus::Medium);
        // 50 / 100 = 0.50 exactly
        assert_eq!(StockStatus::classify(50, max(100)), StockStatus::High);
        assert_eq!(StockStatus::classify(19, max(100)), StockStatus::Low);
        assert_eq!(StockStatus::classify(49, max(100)), StockStatus::Medium);
    }

    #[test]
    fn examples_from_the_catalog() {
        assert_eq!(StockStatus::classify(12, max(80)), StockStatus::Low);
        assert_eq!(StockStatus::classify(23, max(150)), StockStatus::Low);
        assert_eq!(StockStatus::classify(67, max(100)), StockStatus::High);
        assert_eq!(StockStatus::classify(89, max(120)), StockStatus::High);
    }

    #[test]
    fn empty_and_overfull_stock() {
        assert_eq!(StockStatus::classify(0, max(1)), StockStatus::Low);
        assert_eq!(StockStatus::classify(500, max(100)), StockStatus::High);
        assert_eq!(StockStatus::classify(u64::MAX, max(u64::MAX)), StockStatus::High);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StockStatus::Medium).unwrap(), "\"medium\"");
        assert_eq!(StockStatus::Medium.label(), "MEDIUM");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: integer classification agrees with the ratio thresholds.
            #[test]
            fn classification_matches_ratio(stock in 0u64..20_000, max_stock in 1u64..10_000) {
                let ratio = stock as f64 / max_stock as f64;
                let status = StockStatus::classify(stock, NonZeroU64::new(max_stock).unwrap());

                let expected = if ratio < 0.20 {
                    StockStatus::Low
                } else if ratio < 0.50 {
                    StockStatus::Medium
                } else {
                    StockStatus::High
                };
                prop_assert_eq!(status, expected);
            }
        }
    }
}
