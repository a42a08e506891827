pub mod calculations;
pub mod random;

pub use calculations::{Totals, calculate_calories, calculate_price, calculate_totals, totals_with};
pub use random::random_order;
