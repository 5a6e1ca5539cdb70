// Trip Planner - Core Library
// Pricing rule and booking ledger, shared by the TUI form and the tests

pub mod category;
pub mod pricing;
pub mod ledger;
pub mod format;
pub mod config;

// Re-export commonly used types
pub use category::{Category, UnknownCategory};
pub use pricing::{cost, cost_by_name, price_list, unit_price, Rate};
pub use ledger::{inclusive_days, Booking, BookingConfirmation, BookingError, Ledger};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
