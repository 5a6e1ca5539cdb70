// 🖨️ Display formatting - Everything the form renders as text
//
// Dates are shown as dd/MM/yyyy, amounts with exactly two decimals followed
// by the currency unit. Nothing here touches ledger state.

use crate::category::Category;
use crate::ledger::{Booking, BookingConfirmation};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// chrono pattern for `dd/MM/yyyy`
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date typed into the form.
///
/// Accepts `dd/MM/yyyy`, and ISO `yyyy-mm-dd` as a fallback.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Some(date);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Amount with two decimals (`90000.00`), rounding half to even
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{:.2}", rounded)
}

// ============================================================================
// LISTINGS
// ============================================================================

/// `"{category}: {destination} from {from} to {to} - {cost} {unit}"`
pub fn booking_line(booking: &Booking, currency_unit: &str) -> String {
    format!(
        "{}: {} from {} to {} - {} {}",
        booking.category(),
        booking.destination(),
        format_date(booking.from_date()),
        format_date(booking.to_date()),
        format_amount(booking.cost()),
        currency_unit
    )
}

pub fn booking_lines(bookings: &[Booking], currency_unit: &str) -> Vec<String> {
    bookings
        .iter()
        .map(|b| booking_line(b, currency_unit))
        .collect()
}

/// `"{category}: {price} {unit} per day"`
pub fn price_line(category: Category, price: Decimal, currency_unit: &str) -> String {
    format!(
        "{}: {} {} per day",
        category,
        format_amount(price),
        currency_unit
    )
}

pub fn price_lines(prices: &[(Category, Decimal)], currency_unit: &str) -> Vec<String> {
    prices
        .iter()
        .map(|&(category, price)| price_line(category, price, currency_unit))
        .collect()
}

// ============================================================================
// MESSAGES
// ============================================================================

pub fn total_label(total: Decimal, currency_unit: &str) -> String {
    format!("Total cost: {} {}", format_amount(total), currency_unit)
}

pub fn confirmation_title(confirmation: &BookingConfirmation) -> String {
    format!("Booking {}", confirmation.category)
}

pub fn confirmation_message(confirmation: &BookingConfirmation) -> String {
    format!(
        "{} booked for destination: {}. From: {}. To: {}",
        confirmation.category, confirmation.destination, confirmation.from_date, confirmation.to_date
    )
}

pub const ERROR_TITLE: &str = "Error";

pub fn missing_selection_message() -> &'static str {
    "Please select a category."
}
