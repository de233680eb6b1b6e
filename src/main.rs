use std::path::Path;

use anyhow::Result;
use clap::Parser;
use spy_price_tui::{
    api::YahooApi,
    app::{App, Dashboard},
    config::Cli,
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    logging::init_logging(Path::new(&cli.log_path()), &cli.log_level)?;

    let api = YahooApi::new(&cli.base_url, cli.timeout())?;
    let dashboard = Dashboard::new(api, cli.symbol(), cli.days, cli.adjust_prices());

    let mut app = App::new(dashboard);
    app.run().await
}
