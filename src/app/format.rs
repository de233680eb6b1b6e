use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const DATE_FORMAT: &str = "%d-%b-%Y";
pub const MISSING: &str = "N/A";

// chrono's `%b` always yields English abbreviations, whatever the locale.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_price(price: &Option<Decimal>) -> String {
    match price {
        Some(price) => format!(
            "{:.2}",
            price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => MISSING.to_string(),
    }
}

pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(value) if value.is_nan() => MISSING.to_string(),
        Some(value) if value > 0.0 => format!("+{:.2}%", value),
        Some(value) if value < 0.0 => format!("{:.2}%", value),
        Some(_) => String::from("0.00%"),
        None => MISSING.to_string(),
    }
}
