pub mod daily_change;
pub mod day_count;
pub mod price_record;

pub use daily_change::DailyChange;
pub use day_count::DayCount;
pub use price_record::PriceRecord;
