pub mod app;
pub mod order_row;
pub mod order_summary;

pub use app::App;
pub use order_row::OrderRow;
pub use order_summary::OrderSummary;
