//! Comparison Advisor
//!
//! Places an asking price relative to a model estimate and its deviation
//! band. Rules are evaluated in order and the first match wins:
//!
//! | Condition                          | Tier           |
//! |------------------------------------|----------------|
//! | `asking <= 0`                      | `NoComparison` |
//! | `asking < estimate - deviation`    | `GreatDeal`    |
//! | `asking < estimate`                | `Deal`         |
//! | `asking > estimate + deviation`    | `Overpriced`   |
//! | otherwise                          | `Fair`         |

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Where an asking price falls relative to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// No asking price was supplied
    #[display("No comparison")]
    NoComparison,
    /// Below the lower edge of the band
    #[display("Great deal")]
    GreatDeal,
    /// Below the estimate but inside the band
    #[display("Deal")]
    Deal,
    /// Between the estimate and the upper edge of the band
    #[display("Fair")]
    Fair,
    /// Above the upper edge of the band
    #[display("Overpriced")]
    Overpriced,
}

impl Tier {
    /// Whether the asking price is below the estimate.
    pub const fn is_below_estimate(&self) -> bool {
        matches!(self, Self::GreatDeal | Self::Deal)
    }

    /// One-line explanation of the tier.
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::NoComparison => "No asking price supplied.",
            Self::GreatDeal => "Great deal! Asking price is well below the estimated value.",
            Self::Deal => "Deal. Asking price is below the estimated market value.",
            Self::Fair => "Fair. Asking price is in line with the market.",
            Self::Overpriced => "Overpriced! Asking price is well above the estimated value.",
        }
    }
}

/// Classify `asking_price` against `estimate ± deviation`.
pub fn classify(asking_price: f64, estimate: f64, deviation: f64) -> Tier {
    if asking_price <= 0.0 {
        Tier::NoComparison
    } else if asking_price < estimate - deviation {
        Tier::GreatDeal
    } else if asking_price < estimate {
        Tier::Deal
    } else if asking_price > estimate + deviation {
        Tier::Overpriced
    } else {
        Tier::Fair
    }
}

/// Tier plus the size of the gap between asking price and estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Classification
    pub tier: Tier,
    /// `|asking - estimate|`
    pub magnitude: f64,
    /// `asking - estimate`; positive when the seller asks for more
    pub difference: f64,
}

/// Classify and measure an asking price.
pub fn compare(asking_price: f64, estimate: f64, deviation: f64) -> Comparison {
    let difference = asking_price - estimate;
    Comparison {
        tier: classify(asking_price, estimate, deviation),
        magnitude: difference.abs(),
        difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ESTIMATE: f64 = 1_000_000.0;
    const DEVIATION: f64 = 205_000.0;

    #[rstest]
    #[case(0.0, Tier::NoComparison)]
    #[case(-5.0, Tier::NoComparison)]
    #[case(750_000.0, Tier::GreatDeal)]
    #[case(795_000.0, Tier::Deal)]
    #[case(900_000.0, Tier::Deal)]
    #[case(1_000_000.0, Tier::Fair)]
    #[case(1_205_000.0, Tier::Fair)]
    #[case(1_205_001.0, Tier::Overpriced)]
    #[case(1_300_000.0, Tier::Overpriced)]
    fn test_classify(#[case] asking: f64, #[case] expected: Tier) {
        assert_eq!(classify(asking, ESTIMATE, DEVIATION), expected);
    }

    #[test]
    fn test_compare_magnitude() {
        let cmp = compare(750_000.0, ESTIMATE, DEVIATION);
        assert_eq!(cmp.tier, Tier::GreatDeal);
        assert_eq!(cmp.magnitude, 250_000.0);
        assert_eq!(cmp.difference, -250_000.0);

        let cmp = compare(1_300_000.0, ESTIMATE, DEVIATION);
        assert_eq!(cmp.tier, Tier::Overpriced);
        assert_eq!(cmp.difference, 300_000.0);
    }

    #[test]
    fn test_zero_deviation() {
        assert_eq!(classify(999_999.0, ESTIMATE, 0.0), Tier::GreatDeal);
        assert_eq!(classify(ESTIMATE, ESTIMATE, 0.0), Tier::Fair);
        assert_eq!(classify(1_000_001.0, ESTIMATE, 0.0), Tier::Overpriced);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tier::GreatDeal.to_string(), "Great deal");
        assert!(Tier::Deal.is_below_estimate());
        assert!(!Tier::Fair.is_below_estimate());
    }
}
