pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod pricing;
pub mod validation;

pub use catalog::{CatalogEntry, CatalogItem, Size, Stuffing, Topping};
pub use error::{OrderError, Result};
pub use models::{Order, OrderSummary};
