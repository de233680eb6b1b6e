use derive_getters::Getters;
use derive_new::new;

use super::PriceRecord;

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct DailyChange {
    record: PriceRecord,
    percentage_change: Option<f64>,
}
