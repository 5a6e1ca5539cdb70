// 💰 Pricing Rule - cost(category, days)
//
// Fixed per-category tariffs, in a single unnamed monetary unit:
//   Hotel       30000 per day
//   Flight       9000 flat
//   Tour         5000 per day
//   Restaurant   1800 per day
//   Car          2000 per day
//
// Pure functions only. `days` is not validated: zero or negative day counts
// (inverted date ranges) give zero or negative costs for per-day categories.

use crate::category::Category;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// RATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rate {
    /// Amount charged for each day of the booking
    PerDay(Decimal),

    /// Amount charged once, whatever the length of the booking
    Flat(Decimal),
}

impl Rate {
    pub fn amount(&self) -> Decimal {
        match self {
            Rate::PerDay(amount) | Rate::Flat(amount) => *amount,
        }
    }

    pub fn apply(&self, days: i64) -> Decimal {
        match self {
            Rate::PerDay(amount) => *amount * Decimal::from(days),
            Rate::Flat(amount) => *amount,
        }
    }
}

impl Category {
    /// Tariff for this category
    pub fn rate(&self) -> Rate {
        match self {
            Category::Hotel => Rate::PerDay(Decimal::new(30000, 0)),
            Category::Flight => Rate::Flat(Decimal::new(9000, 0)),
            Category::Tour => Rate::PerDay(Decimal::new(5000, 0)),
            Category::Restaurant => Rate::PerDay(Decimal::new(1800, 0)),
            Category::Car => Rate::PerDay(Decimal::new(2000, 0)),
        }
    }
}

// ============================================================================
// COST FUNCTIONS
// ============================================================================

/// Cost of booking `category` for `days` inclusive calendar days.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use trip_planner::{pricing::cost, Category};
///
/// assert_eq!(cost(Category::Hotel, 3), Decimal::from(90000));
/// assert_eq!(cost(Category::Flight, 10), Decimal::from(9000));
/// ```
pub fn cost(category: Category, days: i64) -> Decimal {
    category.rate().apply(days)
}

/// Cost looked up by category name.
///
/// A name outside the fixed set costs nothing rather than failing. Callers
/// holding a typed `Category` should use [`cost`].
pub fn cost_by_name(name: &str, days: i64) -> Decimal {
    match name.parse::<Category>() {
        Ok(category) => cost(category, days),
        Err(_) => Decimal::ZERO,
    }
}

/// Price of a single day (or the flat price) for `category`
pub fn unit_price(category: Category) -> Decimal {
    cost(category, 1)
}

/// Unit price of every category, in declaration order
pub fn price_list() -> Vec<(Category, Decimal)> {
    Category::ALL
        .iter()
        .map(|&category| (category, unit_price(category)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_table() {
        for days in 1..=30 {
            let d = Decimal::from(days);
            assert_eq!(cost(Category::Hotel, days), dec!(30000) * d);
            assert_eq!(cost(Category::Flight, days), dec!(9000));
            assert_eq!(cost(Category::Tour, days), dec!(5000) * d);
            assert_eq!(cost(Category::Restaurant, days), dec!(1800) * d);
            assert_eq!(cost(Category::Car, days), dec!(2000) * d);
        }
    }

    #[test]
    fn test_flight_is_flat() {
        assert_eq!(cost(Category::Flight, 1), cost(Category::Flight, 365));
        assert_eq!(Category::Flight.rate(), Rate::Flat(dec!(9000)));
    }

    #[test]
    fn test_non_positive_days_are_not_rejected() {
        assert_eq!(cost(Category::Hotel, 0), dec!(0));
        assert_eq!(cost(Category::Car, -2), dec!(-4000));
        assert_eq!(cost(Category::Flight, -5), dec!(9000));
    }

    #[test]
    fn test_cost_by_name_known() {
        assert_eq!(cost_by_name("Tour", 4), dec!(20000));
        assert_eq!(cost_by_name("restaurant", 2), dec!(3600));
    }

    #[test]
    fn test_cost_by_name_unknown_is_zero() {
        assert_eq!(cost_by_name("Spa", 3), Decimal::ZERO);
        assert_eq!(cost_by_name("", 1), Decimal::ZERO);
    }

    #[test]
    fn test_price_list() {
        let prices = price_list();

        assert_eq!(prices.len(), 5);
        assert_eq!(
            prices,
            vec![
                (Category::Hotel, dec!(30000)),
                (Category::Flight, dec!(9000)),
                (Category::Tour, dec!(5000)),
                (Category::Restaurant, dec!(1800)),
                (Category::Car, dec!(2000)),
            ]
        );
        for (category, price) in prices {
            assert_eq!(price, cost(category, 1));
            assert_eq!(price, category.rate().amount());
        }
    }
}
