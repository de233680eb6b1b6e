use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::models::{DailyChange, PriceRecord};

/// Percentage change of every record against the last earlier record with a
/// close, returned newest first. Input order does not matter; for repeated
/// dates the record that comes later in `records` wins.
pub fn percentage_changes(records: &[PriceRecord]) -> Vec<DailyChange> {
    let by_date: BTreeMap<NaiveDate, &PriceRecord> = records
        .iter()
        .map(|record| (*record.date(), record))
        .collect();

    let mut changes = Vec::with_capacity(by_date.len());
    let mut previous_close: Option<Decimal> = None;

    for record in by_date.into_values() {
        let change = percentage_change(previous_close, *record.close());
        changes.push(DailyChange::new(record.clone(), change));
        if record.close().is_some() {
            previous_close = *record.close();
        }
    }

    changes.reverse();
    changes
}

pub fn percentage_change(previous: Option<Decimal>, current: Option<Decimal>) -> Option<f64> {
    let (previous, current) = (previous?, current?);
    if previous.is_zero() {
        return None;
    }

    ((current - previous) / previous * Decimal::ONE_HUNDRED).to_f64()
}
