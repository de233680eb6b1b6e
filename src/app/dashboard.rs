use anyhow::Result;

use super::{
    calc::percentage_changes,
    table::{TableRow, build_rows},
};
use crate::{api::YahooApi, models::DayCount};

/// Runs the fetch, transform and format steps for one symbol and day count.
pub async fn load_rows(
    api: &YahooApi,
    symbol: &str,
    days: DayCount,
    adjust: bool,
) -> Result<Vec<TableRow>> {
    let records = api.get_history(symbol, days, adjust).await?;
    let changes = percentage_changes(&records);
    Ok(build_rows(&changes))
}

#[derive(Clone, Debug)]
pub struct Dashboard {
    api: YahooApi,
    symbol: String,
    days: DayCount,
    adjust: bool,
    rows: Vec<TableRow>,
}

impl Dashboard {
    pub fn new(api: YahooApi, symbol: String, days: DayCount, adjust: bool) -> Self {
        Self {
            api,
            symbol,
            days,
            adjust,
            rows: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn days(&self) -> DayCount {
        self.days
    }

    pub fn rows(&self) -> &Vec<TableRow> {
        &self.rows
    }

    /// Returns whether the day count changed.
    pub fn set_days(&mut self, days: DayCount) -> bool {
        if days == self.days {
            return false;
        }
        tracing::debug!(from = self.days.get(), to = days.get(), "Day count changed");
        self.days = days;
        true
    }

    /// Replaces the table with a fresh fetch. On failure the table is left empty.
    pub async fn refresh(&mut self) -> Result<()> {
        self.rows.clear();
        self.rows = load_rows(&self.api, &self.symbol, self.days, self.adjust).await?;
        Ok(())
    }
}
