//! Read-only catalog of burger options.
//!
//! Every option is a tagged variant. Price and calories are attributes of the
//! tag, so two options that happen to share values never resolve to each other.

mod constants;

use std::fmt;

use serde::Serialize;

pub use constants::*;

/// Price and calorie values of a single catalog option.
///
/// Fields are private and entries are only built by this module, so a caller
/// holding an entry can read it but never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    price: u32,
    calories: u32,
}

impl CatalogEntry {
    pub(crate) const fn new(price: u32, calories: u32) -> Self {
        Self { price, calories }
    }

    #[inline]
    pub const fn price(&self) -> u32 {
        self.price
    }

    #[inline]
    pub const fn calories(&self) -> u32 {
        self.calories
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Large,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Large];

    pub const fn name(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Large => "large",
        }
    }

    pub const fn entry(self) -> CatalogEntry {
        match self {
            Size::Small => SIZE_SMALL,
            Size::Large => SIZE_LARGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stuffing {
    Cheese,
    Salad,
    Potato,
}

impl Stuffing {
    pub const ALL: [Stuffing; 3] = [Stuffing::Cheese, Stuffing::Salad, Stuffing::Potato];

    pub const fn name(self) -> &'static str {
        match self {
            Stuffing::Cheese => "cheese",
            Stuffing::Salad => "salad",
            Stuffing::Potato => "potato",
        }
    }

    pub const fn entry(self) -> CatalogEntry {
        match self {
            Stuffing::Cheese => STUFFING_CHEESE,
            Stuffing::Salad => STUFFING_SALAD,
            Stuffing::Potato => STUFFING_POTATO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Mayo,
    Spice,
}

impl Topping {
    pub const ALL: [Topping; 2] = [Topping::Mayo, Topping::Spice];

    /// Identifier stored on an order, e.g. `"mayo"`.
    pub const fn name(self) -> &'static str {
        match self {
            Topping::Mayo => "mayo",
            Topping::Spice => "spice",
        }
    }

    pub const fn entry(self) -> CatalogEntry {
        match self {
            Topping::Mayo => TOPPING_MAYO,
            Topping::Spice => TOPPING_SPICE,
        }
    }

    /// Exact, case-sensitive identifier lookup.
    pub fn from_identifier(identifier: &str) -> Option<Topping> {
        Self::ALL.into_iter().find(|t| t.name() == identifier)
    }
}

/// Any catalog option, as handed to order construction before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogItem {
    Size(Size),
    Stuffing(Stuffing),
    Topping(Topping),
}

impl CatalogItem {
    pub const fn entry(self) -> CatalogEntry {
        match self {
            CatalogItem::Size(s) => s.entry(),
            CatalogItem::Stuffing(s) => s.entry(),
            CatalogItem::Topping(t) => t.entry(),
        }
    }
}

impl From<Size> for CatalogItem {
    fn from(size: Size) -> Self {
        CatalogItem::Size(size)
    }
}

impl From<Stuffing> for CatalogItem {
    fn from(stuffing: Stuffing) -> Self {
        CatalogItem::Stuffing(stuffing)
    }
}

impl From<Topping> for CatalogItem {
    fn from(topping: Topping) -> Self {
        CatalogItem::Topping(topping)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Stuffing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogItem::Size(s) => write!(f, "size '{}'", s),
            CatalogItem::Stuffing(s) => write!(f, "stuffing '{}'", s),
            CatalogItem::Topping(t) => write!(f, "topping '{}'", t),
        }
    }
}
