// 📒 Booking Ledger - Append-only list of bookings + running total
//
// Invariant:
//   total == sum(booking.cost for booking in bookings)
//
// The total is maintained incrementally on every insert and never recomputed
// on the hot path. `recomputed_total()` exists so callers (and tests) can
// check that it has not drifted.

use crate::category::Category;
use crate::format::format_date;
use crate::pricing;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// "Book" was triggered before a category was chosen
    #[error("no category selected")]
    MissingSelection,
}

// ============================================================================
// BOOKING
// ============================================================================

/// One recorded reservation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    category: Category,
    destination: String,
    from_date: NaiveDate,
    to_date: NaiveDate,
    cost: Decimal,
}

impl Booking {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn from_date(&self) -> NaiveDate {
        self.from_date
    }

    pub fn to_date(&self) -> NaiveDate {
        self.to_date
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    /// Inclusive day count the cost was computed from
    pub fn days(&self) -> i64 {
        inclusive_days(self.from_date, self.to_date)
    }
}

/// What the form shows after a successful booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub category: Category,
    pub destination: String,
    /// `dd/MM/yyyy`
    pub from_date: String,
    /// `dd/MM/yyyy`
    pub to_date: String,
    pub cost: Decimal,
    /// Running total after this booking was added
    pub total: Decimal,
}

/// Inclusive calendar days between two dates: `(to - from) + 1`.
///
/// Not validated. `to == from - 1` gives 0, earlier `to` dates go negative.
pub fn inclusive_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days() + 1
}

// ============================================================================
// LEDGER
// ============================================================================

#[derive(Debug, Default)]
pub struct Ledger {
    bookings: Vec<Booking>,
    total: Decimal,
}

impl Ledger {
    /// Create an empty ledger with a zero total
    pub fn new() -> Self {
        Ledger {
            bookings: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Price and record a booking.
    ///
    /// `category` is `None` when the user has not picked one; that is the only
    /// rejected input, and it leaves the ledger untouched. Destination text and
    /// the date range are taken as given.
    pub fn add_booking(
        &mut self,
        category: Option<Category>,
        destination: impl Into<String>,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Result<BookingConfirmation, BookingError> {
        let category = match category {
            Some(category) => category,
            None => {
                warn!("booking rejected: no category selected");
                return Err(BookingError::MissingSelection);
            }
        };

        let days = inclusive_days(from_date, to_date);
        let cost = pricing::cost(category, days);

        let booking = Booking {
            category,
            destination: destination.into(),
            from_date,
            to_date,
            cost,
        };

        self.total += cost;

        let confirmation = BookingConfirmation {
            category,
            destination: booking.destination.clone(),
            from_date: format_date(from_date),
            to_date: format_date(to_date),
            cost,
            total: self.total,
        };

        self.bookings.push(booking);

        info!(
            category = category.as_str(),
            days,
            cost = %cost,
            total = %self.total,
            "booking added"
        );

        Ok(confirmation)
    }

    /// Current running total
    pub fn total_cost(&self) -> Decimal {
        self.total
    }

    /// All bookings in insertion order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Unit price of every category, in declaration order
    pub fn list_prices(&self) -> Vec<(Category, Decimal)> {
        pricing::price_list()
    }

    /// Sum of booking costs computed from scratch
    pub fn recomputed_total(&self) -> Decimal {
        self.bookings.iter().map(|b| b.cost).sum()
    }
}
