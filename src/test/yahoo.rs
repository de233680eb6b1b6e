#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    use crate::{
        api::{
            YahooApi,
            yahoo::{BASE_URL, parse_chart, period},
            yahoo_dto::ChartResponseDto,
        },
        models::DayCount,
    };

    const SYMBOL: &str = "SPY";

    // 2025-03-05, 2025-03-06 and 2025-03-07, 09:30 New York time.
    const MAR_05: i64 = 1741185000;
    const MAR_06: i64 = 1741271400;
    const MAR_07: i64 = 1741357800;

    fn chart(timestamps: Value, quote: Value, adjclose: Value) -> ChartResponseDto {
        serde_json::from_value(json!({
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": SYMBOL,
                        "currency": "USD",
                        "exchangeName": "PCX",
                        "gmtoffset": -18000
                    },
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [quote],
                        "adjclose": [{ "adjclose": adjclose }]
                    }
                }],
                "error": null
            }
        }))
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn period_is_day_count_with_suffix() {
        assert_eq!(period(DayCount::default()), "5d");
        assert_eq!(period(DayCount::max()), "365d");
    }

    #[test]
    fn parses_rows_newest_first() {
        let response = chart(
            json!([MAR_05, MAR_06, MAR_07]),
            json!({
                "open": [99.5, 100.0, 102.0],
                "high": [101.0, 103.0, 102.25],
                "low": [99.0, 100.0, 98.5],
                "close": [100.0, 102.0, 99.0],
                "volume": [1000, 2000, 3000]
            }),
            json!([100.0, 102.0, 99.0]),
        );

        let records = parse_chart(SYMBOL, response, true).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(*records[0].date(), date(7));
        assert_eq!(*records[0].close(), Some(dec!(99)));
        assert_eq!(*records[0].high(), Some(dec!(102.25)));
        assert_eq!(*records[2].date(), date(5));
        assert_eq!(*records[2].open(), Some(dec!(99.5)));
    }

    #[test]
    fn adjusts_prices_by_adjusted_close() {
        let quote = json!({
            "open": [98.0],
            "high": [104.0],
            "low": [96.0],
            "close": [100.0],
            "volume": [1000]
        });

        let response = chart(json!([MAR_05]), quote.clone(), json!([50.0]));
        let adjusted = parse_chart(SYMBOL, response, true).unwrap();
        assert_eq!(*adjusted[0].open(), Some(dec!(49)));
        assert_eq!(*adjusted[0].high(), Some(dec!(52)));
        assert_eq!(*adjusted[0].low(), Some(dec!(48)));
        assert_eq!(*adjusted[0].close(), Some(dec!(50)));

        let raw = parse_chart(SYMBOL, chart(json!([MAR_05]), quote, json!([50.0])), false).unwrap();
        assert_eq!(*raw[0].open(), Some(dec!(98)));
        assert_eq!(*raw[0].close(), Some(dec!(100)));
    }

    #[test]
    fn skips_rows_without_prices_and_keeps_partial_rows() {
        let response = chart(
            json!([MAR_05, MAR_06, MAR_07]),
            json!({
                "open": [100.0, null, 101.0],
                "high": [100.0, null, 101.0],
                "low": [100.0, null, 101.0],
                "close": [100.0, null, null],
                "volume": [1000, null, 500]
            }),
            json!([100.0, null, null]),
        );

        let records = parse_chart(SYMBOL, response, true).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(*records[0].date(), date(7));
        assert_eq!(*records[0].open(), Some(dec!(101)));
        assert_eq!(*records[0].close(), None);
    }

    #[test]
    fn uses_exchange_local_date_and_keeps_latest_row_per_day() {
        // 03:00 UTC on 8 March is still 7 March in New York.
        let late = 1741402800;
        let response = chart(
            json!([MAR_07, late]),
            json!({
                "open": [100.0, 100.0],
                "high": [101.0, 104.0],
                "low": [99.0, 99.0],
                "close": [100.0, 103.0],
                "volume": [1000, 1500]
            }),
            json!([100.0, 103.0]),
        );

        let records = parse_chart(SYMBOL, response, true).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(*records[0].date(), date(7));
        assert_eq!(*records[0].close(), Some(dec!(103)));
    }

    #[test]
    fn empty_period_yields_no_rows() {
        let response: ChartResponseDto = serde_json::from_value(json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": SYMBOL, "gmtoffset": -18000 },
                    "indicators": { "quote": [{}], "adjclose": [{}] }
                }],
                "error": null
            }
        }))
        .unwrap();

        assert!(parse_chart(SYMBOL, response, true).unwrap().is_empty());
    }

    #[test]
    fn provider_error_is_reported() {
        let response: ChartResponseDto = serde_json::from_value(json!({
            "chart": {
                "result": null,
                "error": {
                    "code": "Not Found",
                    "description": "No data found, symbol may be delisted"
                }
            }
        }))
        .unwrap();

        let err = parse_chart("NOPE", response, true).unwrap_err().to_string();
        assert!(err.contains("NOPE"));
        assert!(err.contains("symbol may be delisted"));
    }

    #[tokio::test]
    #[ignore = "needs network access to Yahoo Finance"]
    async fn get_history_works() {
        let api = YahooApi::new(BASE_URL, Duration::from_secs(10)).unwrap();
        let result = api
            .get_history(SYMBOL, DayCount::new(10).unwrap(), true)
            .await
            .unwrap();

        assert!(!result.is_empty());
        assert!(result.windows(2).all(|w| w[0].date() > w[1].date()));
    }
}
