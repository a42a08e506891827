use super::CatalogEntry;

// ─────────────────────────────────────────────────────────────────────────────
// Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// Small burger: 50 price units, 20 kcal.
pub const SIZE_SMALL: CatalogEntry = CatalogEntry::new(50, 20);

/// Large burger: 100 price units, 20 kcal.
pub const SIZE_LARGE: CatalogEntry = CatalogEntry::new(100, 20);

// ─────────────────────────────────────────────────────────────────────────────
// Stuffings
// ─────────────────────────────────────────────────────────────────────────────

pub const STUFFING_CHEESE: CatalogEntry = CatalogEntry::new(10, 20);
pub const STUFFING_SALAD: CatalogEntry = CatalogEntry::new(20, 5);
pub const STUFFING_POTATO: CatalogEntry = CatalogEntry::new(15, 10);

// ─────────────────────────────────────────────────────────────────────────────
// Toppings
// ─────────────────────────────────────────────────────────────────────────────

/// Shares its price and calories with salad stuffing; lookups go by tag.
pub const TOPPING_MAYO: CatalogEntry = CatalogEntry::new(20, 5);
pub const TOPPING_SPICE: CatalogEntry = CatalogEntry::new(15, 0);
