//! # Meal Builder Kiosk
//!
//! Console front end for `meal-core`.
//!
//! ## Module Organization
//! ```text
//! meal_kiosk/
//! ├── lib.rs       ◄─── You are here (startup & session)
//! ├── config.rs    ◄─── Environment + flag configuration
//! ├── console.rs   ◄─── TokenSource over stdin
//! ├── receipt.rs   ◄─── Text / JSON receipts
//! └── error.rs     ◄─── KioskError, ConfigError
//! ```
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Format   Banner + prompts     Receipt     Logs                          │
//! │  ──────   ────────────────     ───────     ──────                        │
//! │  text     stdout               stdout      stderr                        │
//! │  json     stderr               stdout      stderr                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! In JSON mode stdout carries nothing but the receipt document.

pub mod config;
pub mod console;
pub mod error;
pub mod receipt;

use std::io::{self, BufRead, Write};

use meal_core::{prepare_order, Receipt, ScriptedTokens};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{CliArgs, KioskConfig, OutputFormat, USAGE};
use console::ConsoleTokens;
use error::KioskResult;

/// Runs the kiosk with the process arguments, environment and terminal.
///
/// ## Startup Sequence
/// 1. Parse flags (`--help` prints usage and stops)
/// 2. Load configuration from `MEAL_*` variables, apply flags
/// 3. Initialize tracing
/// 4. Run one ordering session
pub fn run() -> KioskResult<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{USAGE}");
        return Ok(());
    }

    let config = KioskConfig::from_env()?.with_args(&args);
    init_tracing(&config.log_filter);

    info!(store = %config.store_name, output = ?config.output, "Starting Meal Builder kiosk");
    debug!(?config, "Configuration loaded");

    let stdin = io::stdin();
    let receipt = match config.output {
        OutputFormat::Text => run_session(
            &config,
            args.script.as_deref(),
            stdin.lock(),
            io::stdout(),
            io::stdout(),
        )?,
        OutputFormat::Json => run_session(
            &config,
            args.script.as_deref(),
            stdin.lock(),
            io::stderr(),
            io::stdout(),
        )?,
    };

    info!(order_id = %receipt.order_id, total = %receipt.total, "Session complete");
    Ok(())
}

/// Runs one ordering session.
///
/// The banner and prompts go to `prompts`, the receipt to `out`. With a
/// `script`, answers come from its whitespace-separated tokens and `input`
/// is never read.
pub fn run_session<R, P, W>(
    config: &KioskConfig,
    script: Option<&str>,
    input: R,
    mut prompts: P,
    mut out: W,
) -> KioskResult<Receipt>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    writeln!(prompts, "Welcome to {}!", config.store_name)?;

    let order = match script {
        Some(script) => {
            debug!(script, "Answering from script");
            prepare_order(&mut ScriptedTokens::from_script(script))?
        }
        None => prepare_order(&mut ConsoleTokens::new(input, &mut prompts))?,
    };
    prompts.flush()?;

    let receipt = order.receipt();
    receipt::write_receipt(&mut out, &receipt, config)?;
    Ok(receipt)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every selection decision
/// - `RUST_LOG=meal_core=trace` - Also show each answer token
/// - Default: `MEAL_LOG`, else WARN
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use meal_core::{CoreError, Money, Packaging};
    use std::io::Cursor;

    #[test]
    fn test_interactive_session() {
        let mut prompts = Vec::new();
        let mut out = Vec::new();
        let receipt = run_session(
            &KioskConfig::default(),
            None,
            Cursor::new("1\n1\n"),
            &mut prompts,
            &mut out,
        )
        .unwrap();

        assert_eq!(receipt.total, Money::from_cents(5500));

        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.starts_with("Welcome to Custom Meal Builder!\n"));
        assert!(prompts.contains("Choose Drink:"));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Item: Veg Burger, Packing: Wrapper, Price: 25.00"));
        assert!(out.ends_with("Total Cost: 55.00\n"));
    }

    #[test]
    fn test_scripted_session_ignores_input() {
        let mut out = Vec::new();
        let receipt = run_session(
            &KioskConfig::default(),
            Some("3 5 yes Sugar 1 yes"),
            Cursor::new("this would fail"),
            io::sink(),
            &mut out,
        )
        .unwrap();

        assert_eq!(receipt.total, Money::from_cents(2700));
        assert_eq!(receipt.lines[0].packaging, Packaging::Cup);
    }

    #[test]
    fn test_json_session_keeps_stdout_clean() {
        let config = KioskConfig {
            output: OutputFormat::Json,
            ..KioskConfig::default()
        };
        let mut out = Vec::new();
        run_session(&config, Some("3 6"), io::empty(), io::sink(), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["lines"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_session_fails_on_closed_input() {
        let result = run_session(
            &KioskConfig::default(),
            None,
            io::empty(),
            io::sink(),
            io::sink(),
        );
        assert!(matches!(
            result,
            Err(error::KioskError::Core(CoreError::InputExhausted { .. }))
        ));
    }
}
