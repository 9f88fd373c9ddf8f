//! # Kiosk Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--json`, `--script`)
//! 2. Environment variables (`MEAL_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only once the session starts.

use meal_core::Money;

use crate::error::ConfigError;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Meal Builder Kiosk

Usage: meal-kiosk [OPTIONS]

Options:
  --json                 Print the receipt as JSON (prompts go to stderr)
  -s, --script <TOKENS>  Answer the prompts from TOKENS instead of stdin
  -h, --help             Show this help message

Environment:
  MEAL_STORE_NAME        Name shown in the welcome banner
  MEAL_CURRENCY_SYMBOL   Symbol placed before every price
  MEAL_OUTPUT            text | json
  MEAL_LOG               Log filter when RUST_LOG is unset (default: warn)
";

/// How the receipt is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("MEAL_OUTPUT".to_string())),
        }
    }
}

/// Kiosk configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    /// Placed before every printed price. Empty by default.
    pub currency_symbol: String,

    pub output: OutputFormat,

    /// Default `tracing` filter, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        KioskConfig {
            store_name: "Custom Meal Builder".to_string(),
            currency_symbol: String::new(),
            output: OutputFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl KioskConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = KioskConfig::default();

        if let Some(store_name) = lookup("MEAL_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("MEAL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(output) = lookup("MEAL_OUTPUT") {
            config.output = output.parse()?;
        }

        if let Some(filter) = lookup("MEAL_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Applies command line overrides.
    pub fn with_args(mut self, args: &CliArgs) -> Self {
        if args.json {
            self.output = OutputFormat::Json;
        }
        self
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use meal_core::Money;
    /// use meal_kiosk::config::KioskConfig;
    ///
    /// let config = KioskConfig {
    ///     currency_symbol: "$".to_string(),
    ///     ..KioskConfig::default()
    /// };
    /// assert_eq!(config.format_currency(Money::from_cents(5050)), "$50.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.major().abs(),
            amount.minor()
        )
    }
}

// =============================================================================
// Command Line
// =============================================================================

/// Parsed command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub json: bool,
    pub script: Option<String>,
    pub help: bool,
}

impl CliArgs {
    /// Parses flags (program name already stripped).
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => cli.json = true,
                "-s" | "--script" => {
                    let script = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    cli.script = Some(script);
                }
                "-h" | "--help" => cli.help = true,
                _ => return Err(ConfigError::UnknownFlag(arg)),
            }
        }

        Ok(cli)
    }
}
