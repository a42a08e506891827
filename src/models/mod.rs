mod order;
mod summary;

pub use order::Order;
pub use summary::OrderSummary;
