// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

use trip_planner::format::price_lines;
use trip_planner::{Config, Ledger};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "prices" {
        run_prices(&config);
    } else {
        // Form mode (default)
        run_ui_mode(&config)?;
    }

    Ok(())
}

/// Logs go to stderr; stdout belongs to the form
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_prices(config: &Config) {
    let ledger = Ledger::new();
    for line in price_lines(&ledger.list_prices(), &config.currency_unit) {
        println!("{}", line);
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config) -> Result<()> {
    // One ledger per session, owned here and lent to the form
    let mut ledger = Ledger::new();
    let mut app = ui::App::new(config.currency_unit.clone(), ui::today());

    tracing::info!(version = trip_planner::VERSION, "starting booking form");
    ui::run_ui(&mut app, &mut ledger)?;
    tracing::info!(
        bookings = ledger.len(),
        total = %ledger.total_cost(),
        "booking form closed"
    );

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &Config) -> Result<()> {
    eprintln!("❌ Booking form not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or list prices with: trip-planner prices");
    std::process::exit(1);
}
