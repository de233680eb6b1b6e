use derive_getters::Getters;
use derive_new::new;
use strum_macros::{Display, EnumIter};

use super::format::{format_change, format_date, format_price};
use crate::models::DailyChange;

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Column {
    Date,
    Open,
    High,
    Low,
    Close,
    #[strum(to_string = "Percentage Change")]
    PercentageChange,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChangeColor {
    Negative,
    Positive,
    Neutral,
}

/// Colour of a percentage change by its sign. NaN is neutral.
pub fn color_for(value: f64) -> ChangeColor {
    if value < 0.0 {
        ChangeColor::Negative
    } else if value > 0.0 {
        ChangeColor::Positive
    } else {
        ChangeColor::Neutral
    }
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct TableRow {
    date: String,
    open: String,
    high: String,
    low: String,
    close: String,
    percentage_change: String,
    change_color: ChangeColor,
}

impl TableRow {
    pub fn cell(&self, column: Column) -> &str {
        match column {
            Column::Date => &self.date,
            Column::Open => &self.open,
            Column::High => &self.high,
            Column::Low => &self.low,
            Column::Close => &self.close,
            Column::PercentageChange => &self.percentage_change,
        }
    }
}

pub fn build_rows(changes: &[DailyChange]) -> Vec<TableRow> {
    changes
        .iter()
        .map(|change| {
            let record = change.record();
            let percentage_change = *change.percentage_change();
            TableRow::new(
                format_date(record.date()),
                format_price(record.open()),
                format_price(record.high()),
                format_price(record.low()),
                format_price(record.close()),
                format_change(percentage_change),
                percentage_change.map_or(ChangeColor::Neutral, color_for),
            )
        })
        .collect()
}
