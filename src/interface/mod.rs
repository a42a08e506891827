pub mod export;
pub mod render;

pub use export::{summary_json, write_menu_csv};
pub use render::{display_menu, display_receipt};
