use std::{collections::BTreeMap, time::Duration};

use anyhow::{Context, Error, Result};
use chrono::{DateTime, NaiveDate};
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use super::{
    utils::{make_request, parse_response_object},
    yahoo_dto::ChartResponseDto,
};
use crate::models::{DayCount, PriceRecord};

pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

// Yahoo answers requests without a browser user agent with 429.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
    base_url: String,
}

impl YahooApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the last `days` trading days for `symbol`, newest first.
    ///
    /// With `adjust` set, prices are scaled by the adjusted close so that
    /// splits and dividends do not show up as price jumps.
    pub async fn get_history(
        &self,
        symbol: &str,
        days: DayCount,
        adjust: bool,
    ) -> Result<Vec<PriceRecord>> {
        let endpoint = format!("v8/finance/chart/{}", symbol);
        let params = format!(
            "range={}&interval=1d&includeAdjustedClose=true",
            period(days)
        );

        let (status, res) = make_request(&self.client, &self.base_url, &endpoint, &params)
            .await
            .with_context(|| format!("Yahoo Finance ({})", symbol))?;

        let parsed = parse_response_object::<ChartResponseDto>(
            res,
            &format!("Failed to parse Yahoo Finance chart for {}", symbol),
        )
        .await;

        // A failed request only carries a usable body when it holds a chart error.
        let chart = match parsed {
            Ok(chart) if status.is_success() || chart.chart.error.is_some() => chart,
            Err(e) if status.is_success() => return Err(e),
            _ => {
                return Err(Error::msg(format!(
                    "Yahoo Finance ({}): Request failed: {}",
                    symbol, status
                )));
            }
        };

        let records = parse_chart(symbol, chart, adjust)?;
        tracing::info!(symbol, days = days.get(), rows = records.len(), "Fetched price history");

        Ok(records)
    }
}

/// Period string understood by the chart endpoint's `range` parameter.
pub fn period(days: DayCount) -> String {
    format!("{}d", days)
}

pub fn parse_chart(
    symbol: &str,
    response: ChartResponseDto,
    adjust: bool,
) -> Result<Vec<PriceRecord>> {
    let chart = response.chart;

    if let Some(error) = chart.error {
        return Err(Error::msg(format!(
            "Yahoo Finance ({}): {}: {}",
            symbol, error.code, error.description
        )));
    }

    let result = chart
        .result
        .and_then(|results| results.into_iter().next())
        .with_context(|| format!("Yahoo Finance ({}): No chart in response", symbol))?;

    let Some(timestamps) = result.timestamp else {
        tracing::warn!(symbol, "No trading days in the requested period");
        return Ok(Vec::new());
    };

    let offset = result.meta.gmtoffset.unwrap_or(0);
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adj_closes = result
        .indicators
        .adjclose
        .and_then(|adj| adj.into_iter().next())
        .map(|adj| adj.adjclose)
        .unwrap_or_default();

    let mut by_date: BTreeMap<NaiveDate, PriceRecord> = BTreeMap::new();

    for (i, timestamp) in timestamps.iter().enumerate() {
        let open = value_at(&quote.open, i);
        let high = value_at(&quote.high, i);
        let low = value_at(&quote.low, i);
        let close = value_at(&quote.close, i);

        if open.is_none() && high.is_none() && low.is_none() && close.is_none() {
            continue;
        }

        let date = DateTime::from_timestamp(timestamp + offset, 0)
            .map(|dt| dt.date_naive())
            .with_context(|| {
                format!("Yahoo Finance ({}): Invalid timestamp {}", symbol, timestamp)
            })?;

        let factor = if adjust {
            adjustment_factor(close, value_at(&adj_closes, i))
        } else {
            None
        };
        let scale = |price: Option<Decimal>| match factor {
            Some(factor) => price.map(|p| p * factor),
            None => price,
        };

        // A second row for the same day is the live intraday bar; keep it.
        by_date.insert(
            date,
            PriceRecord::new(date, scale(open), scale(high), scale(low), scale(close)),
        );
    }

    Ok(by_date.into_values().rev().collect())
}

fn value_at(values: &[Option<f64>], i: usize) -> Option<Decimal> {
    values
        .get(i)
        .copied()
        .flatten()
        .and_then(Decimal::from_f64)
}

fn adjustment_factor(close: Option<Decimal>, adj_close: Option<Decimal>) -> Option<Decimal> {
    match (close, adj_close) {
        (Some(close), Some(adj_close)) if !close.is_zero() => Some(adj_close / close),
        _ => None,
    }
}
