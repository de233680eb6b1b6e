use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartResponseDto {
    pub chart: ChartDto,
}

#[derive(Debug, Deserialize)]
pub struct ChartDto {
    pub result: Option<Vec<ChartResultDto>>,
    pub error: Option<ChartErrorDto>,
}

#[derive(Debug, Deserialize)]
pub struct ChartErrorDto {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResultDto {
    pub meta: ChartMetaDto,
    pub timestamp: Option<Vec<i64>>,
    pub indicators: IndicatorsDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetaDto {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    /// Seconds east of UTC for the exchange the symbol trades on.
    pub gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct IndicatorsDto {
    #[serde(default)]
    pub quote: Vec<QuoteDto>,
    pub adjclose: Option<Vec<AdjCloseDto>>,
}

// Yahoo sends `"quote": [{}]` for a range without trading days.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteDto {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
pub struct AdjCloseDto {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}
