//! # Fare Calculator
//!
//! Static fare-class catalog and price derivation. The catalog is fixed at
//! exactly three entries and is not configurable.

/// Fare class tier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareClassName {
    Economy,
    Business,
    FirstClass,
}

impl FareClassName {
    /// Display label for the tier.
    pub fn label(&self) -> &'static str {
        match self {
            FareClassName::Economy => "Economy",
            FareClassName::Business => "Business",
            FareClassName::FirstClass => "First Class",
        }
    }
}

/// A fare class: tier name, price multiplier, and included features.
#[derive(Debug, Clone, Copy)]
pub struct FareClass {
    pub name: FareClassName,
    /// Applied to a flight's base price; always >= 1.0.
    pub multiplier: f64,
    pub features: &'static [&'static str],
}

/// The fixed three-tier catalog, invariant across the process.
pub const FARE_CLASSES: [FareClass; 3] = [
    FareClass {
        name: FareClassName::Economy,
        multiplier: 1.0,
        features: &["Standard Seat", "1 Carry-on"],
    },
    FareClass {
        name: FareClassName::Business,
        multiplier: 2.2,
        features: &["Lounge Access", "Priority Boarding", "Recliner Seat"],
    },
    FareClass {
        name: FareClassName::FirstClass,
        multiplier: 4.0,
        features: &["Private Suite", "Gourmet Dining", "Full Bed"],
    },
];

/// Fixed tax/fee surcharge added to every booking total.
pub const TAXES_AND_FEES: u32 = 45;

/// Price for a fare class: base price times multiplier, rounded to the
/// nearest whole currency unit.
pub fn compute_price(base_price: u32, multiplier: f64) -> u32 {
    (base_price as f64 * multiplier).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_three_tiers() {
        assert_eq!(FARE_CLASSES.len(), 3);
        assert_eq!(FARE_CLASSES[0].name.label(), "Economy");
        assert_eq!(FARE_CLASSES[1].name.label(), "Business");
        assert_eq!(FARE_CLASSES[2].name.label(), "First Class");
        for class in &FARE_CLASSES {
            assert!(class.multiplier >= 1.0);
            assert!(!class.features.is_empty());
        }
    }

    #[test]
    fn test_compute_price_rounds_to_nearest() {
        assert_eq!(compute_price(250, 1.0), 250);
        assert_eq!(compute_price(250, 2.2), 550);
        // 333 * 2.2 = 732.6 -> 733
        assert_eq!(compute_price(333, 2.2), 733);
        assert_eq!(compute_price(301, 4.0), 1204);
    }

    #[test]
    fn test_fare_prices_non_decreasing_across_tiers() {
        for base in [300u32, 457, 621, 749] {
            let prices: Vec<u32> = FARE_CLASSES
                .iter()
                .map(|c| compute_price(base, c.multiplier))
                .collect();
            assert!(prices[0] <= prices[1] && prices[1] <= prices[2], "base {base}: {prices:?}");
        }
    }
}
