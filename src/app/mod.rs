pub mod app;
pub mod calc;
pub mod dashboard;
pub mod format;
pub mod table;
pub mod ui;

pub use app::App;
pub use dashboard::Dashboard;
