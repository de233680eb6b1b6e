use std::time::Duration;

use clap::Parser;

use crate::{api::yahoo::BASE_URL, models::DayCount};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Ticker symbol to display
    #[arg(long, env = "SPY_SYMBOL", default_value = "SPY")]
    pub symbol: String,

    /// Initial number of days to fetch (1-365)
    #[arg(long, env = "SPY_DAYS", default_value_t = DayCount::default())]
    pub days: DayCount,

    /// Base URL of the Yahoo Finance chart API
    #[arg(long, env = "YAHOO_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "YAHOO_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Show prices as traded instead of adjusted for splits and dividends
    #[arg(long)]
    pub raw_prices: bool,

    /// File the log is written to
    #[arg(long, env = "SPY_LOG_FILE", default_value = "~/.spy-price-tui.log")]
    pub log_file: String,

    /// Log filter, e.g. `info` or `spy_price_tui=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn symbol(&self) -> String {
        self.symbol.trim().to_uppercase()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_path(&self) -> String {
        shellexpand::tilde(&self.log_file).into_owned()
    }

    pub fn adjust_prices(&self) -> bool {
        !self.raw_prices
    }
}
