use tracing::debug;

use crate::catalog::{CatalogItem, Size, Stuffing, Topping};
use crate::error::{OrderError, Result};
use crate::models::OrderSummary;
use crate::pricing::calculations;
use crate::validation;

/// A single burger being assembled: one size, one stuffing and a set of toppings.
///
/// Toppings are stored as bare identifiers in insertion order and are only
/// checked against the catalog when read, so [`Order::add_topping`] accepts
/// identifiers the catalog does not know and [`Order::toppings`] is where they
/// surface as [`OrderError::InvalidTopping`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    size: Size,
    stuffing: Stuffing,
    toppings: Vec<String>,
}

impl Order {
    /// Create an order with no toppings.
    pub fn new(size: Size, stuffing: Stuffing) -> Self {
        debug!(%size, %stuffing, "order created");
        Self {
            size,
            stuffing,
            toppings: Vec::new(),
        }
    }

    /// Create an order from unchecked catalog options.
    ///
    /// Fails with `InvalidSize` or `InvalidStuffing` if either is missing or
    /// belongs to the wrong group. Size is checked first.
    pub fn try_new(size: Option<CatalogItem>, stuffing: Option<CatalogItem>) -> Result<Self> {
        let size = validation::validate_size(size)?;
        let stuffing = validation::validate_stuffing(stuffing)?;
        Ok(Self::new(size, stuffing))
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn stuffing(&self) -> Stuffing {
        self.stuffing
    }

    pub fn is_large(&self) -> bool {
        self.size == Size::Large
    }

    /// Append a topping identifier. Rejects duplicates.
    pub fn add_topping(&mut self, identifier: impl Into<String>) -> Result<()> {
        let identifier = identifier.into();
        if self.has_topping(&identifier) {
            return Err(OrderError::DuplicateTopping(identifier));
        }

        debug!(topping = %identifier, "topping added");
        self.toppings.push(identifier);
        Ok(())
    }

    /// Remove a previously added topping identifier.
    pub fn remove_topping(&mut self, identifier: &str) -> Result<()> {
        let index = self
            .toppings
            .iter()
            .position(|t| t == identifier)
            .ok_or_else(|| OrderError::ToppingNotFound(identifier.to_string()))?;

        self.toppings.remove(index);
        debug!(topping = identifier, "topping removed");
        Ok(())
    }

    /// Replace every topping at once. Blank identifiers are rejected here only;
    /// on error the current toppings are kept.
    pub fn replace_toppings<I, S>(&mut self, toppings: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next: Vec<String> = Vec::new();
        for identifier in toppings {
            let identifier = identifier.into();
            check_identifier(&identifier)?;
            if next.contains(&identifier) {
                return Err(OrderError::DuplicateTopping(identifier));
            }
            next.push(identifier);
        }

        debug!(count = next.len(), "toppings replaced");
        self.toppings = next;
        Ok(())
    }

    pub fn has_topping(&self, identifier: &str) -> bool {
        self.toppings.iter().any(|t| t == identifier)
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Copy of the stored topping identifiers, in insertion order.
    pub fn topping_identifiers(&self) -> Vec<String> {
        self.toppings.clone()
    }

    /// Resolve every stored identifier against the catalog.
    pub fn toppings(&self) -> Result<Vec<Topping>> {
        self.toppings
            .iter()
            .map(|t| validation::resolve_topping(t))
            .collect()
    }

    pub fn calculate_price(&self) -> Result<u32> {
        calculations::calculate_price(self)
    }

    pub fn calculate_calories(&self) -> Result<u32> {
        calculations::calculate_calories(self)
    }

    /// Snapshot of this order with its current totals.
    pub fn summary(&self) -> Result<OrderSummary> {
        OrderSummary::from_order(self)
    }
}

fn check_identifier(identifier: &str) -> Result<()> {
    if identifier.trim().is_empty() {
        return Err(OrderError::InvalidArgument(
            "topping identifier must not be blank".to_string(),
        ));
    }
    Ok(())
}
