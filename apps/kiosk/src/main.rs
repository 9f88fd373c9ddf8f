//! # Meal Builder Kiosk Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    match meal_kiosk::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Kiosk session failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
