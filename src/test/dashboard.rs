#[cfg(test)]
mod tests {
    use crate::{
        app::{Dashboard, dashboard::load_rows, table::ChangeColor},
        models::DayCount,
        test::server::{api, chart_body, not_found_body, serve},
    };

    #[tokio::test]
    async fn load_rows_runs_the_whole_pipeline() {
        let (base_url, mut requests) = serve(vec![("200 OK", chart_body())]).await;

        let rows = load_rows(&api(&base_url), "SPY", DayCount::default(), true)
            .await
            .unwrap();

        let request_line = requests.recv().await.unwrap();
        assert!(request_line.starts_with("GET /v8/finance/chart/SPY?"));
        assert!(request_line.contains("range=5d"));
        assert!(request_line.contains("interval=1d"));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date(), "07-Mar-2025");
        assert_eq!(rows[0].percentage_change(), "-2.94%");
        assert_eq!(*rows[0].change_color(), ChangeColor::Negative);
        assert_eq!(rows[1].percentage_change(), "+2.00%");
        assert_eq!(*rows[1].change_color(), ChangeColor::Positive);
        assert_eq!(rows[2].date(), "05-Mar-2025");
        assert_eq!(rows[2].percentage_change(), "N/A");
    }

    #[tokio::test]
    async fn refresh_replaces_rows() {
        let (base_url, _requests) = serve(vec![("200 OK", chart_body())]).await;
        let mut dashboard =
            Dashboard::new(api(&base_url), "SPY".to_string(), DayCount::default(), true);

        assert!(dashboard.rows().is_empty());
        dashboard.refresh().await.unwrap();
        assert_eq!(dashboard.rows().len(), 3);
    }

    #[tokio::test]
    async fn unknown_symbol_reports_provider_message_and_clears_rows() {
        let (base_url, _requests) = serve(vec![
            ("200 OK", chart_body()),
            ("404 Not Found", not_found_body()),
        ])
        .await;
        let mut dashboard =
            Dashboard::new(api(&base_url), "SPY".to_string(), DayCount::default(), true);

        dashboard.refresh().await.unwrap();
        assert_eq!(dashboard.rows().len(), 3);

        let message = format!("{:?}", dashboard.refresh().await.unwrap_err());
        assert!(message.contains("Yahoo Finance (SPY): Not Found"));
        assert!(message.contains("symbol may be delisted"));
        assert!(dashboard.rows().is_empty());
    }

    #[tokio::test]
    async fn error_status_without_chart_error_reports_status() {
        let (base_url, _requests) = serve(vec![
            ("500 Internal Server Error", String::from("upstream timeout")),
            ("503 Service Unavailable", String::from("{}")),
        ])
        .await;
        let api = api(&base_url);

        let message = format!(
            "{:?}",
            load_rows(&api, "SPY", DayCount::default(), true).await.unwrap_err()
        );
        assert!(message.contains("500"));
        assert!(message.contains("upstream timeout"));

        let message = format!(
            "{:?}",
            load_rows(&api, "SPY", DayCount::default(), true).await.unwrap_err()
        );
        assert!(message.contains("Request failed: 503"));
    }

    #[test]
    fn set_days_reports_changes() {
        let mut dashboard = Dashboard::new(
            api("http://127.0.0.1:9"),
            "SPY".to_string(),
            DayCount::default(),
            true,
        );

        assert!(!dashboard.set_days(DayCount::default()));
        assert!(dashboard.set_days(DayCount::new(30).unwrap()));
        assert_eq!(dashboard.days().get(), 30);
    }
}
