use serde::Serialize;

use crate::catalog::{CatalogEntry, Topping};
use crate::error::Result;
use crate::models::Order;

/// Combined price and calories of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub price: u32,
    pub calories: u32,
}

impl Totals {
    fn add(self, entry: CatalogEntry) -> Self {
        Self {
            price: self.price + entry.price(),
            calories: self.calories + entry.calories(),
        }
    }
}

/// Size, stuffing and every current topping, resolved against the catalog.
fn entries(order: &Order) -> Result<Vec<CatalogEntry>> {
    Ok(entries_with(order, &order.toppings()?))
}

fn entries_with(order: &Order, toppings: &[Topping]) -> Vec<CatalogEntry> {
    let mut entries = vec![order.size().entry(), order.stuffing().entry()];
    entries.extend(toppings.iter().map(|t| t.entry()));
    entries
}

/// Sum of size, stuffing and topping prices.
pub fn calculate_price(order: &Order) -> Result<u32> {
    Ok(entries(order)?.iter().map(CatalogEntry::price).sum())
}

/// Sum of size, stuffing and topping calories.
pub fn calculate_calories(order: &Order) -> Result<u32> {
    Ok(entries(order)?.iter().map(CatalogEntry::calories).sum())
}

/// Price and calories in one pass.
pub fn calculate_totals(order: &Order) -> Result<Totals> {
    Ok(totals_with(order, &order.toppings()?))
}

/// Totals for the order's size and stuffing plus already resolved toppings.
pub fn totals_with(order: &Order, toppings: &[Topping]) -> Totals {
    entries_with(order, toppings)
        .into_iter()
        .fold(Totals::default(), Totals::add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Size, Stuffing};
    use crate::error::OrderError;

    #[test]
    fn test_base_totals() {
        let order = Order::new(Size::Small, Stuffing::Cheese);
        assert_eq!(calculate_price(&order).unwrap(), 60);
        assert_eq!(calculate_calories(&order).unwrap(), 40);
    }

    #[test]
    fn test_totals_follow_live_toppings() {
        let mut order = Order::new(Size::Large, Stuffing::Salad);
        assert_eq!(
            calculate_totals(&order).unwrap(),
            Totals {
                price: 120,
                calories: 25
            }
        );

        order.add_topping("mayo").unwrap();
        order.add_topping("spice").unwrap();
        assert_eq!(
            calculate_totals(&order).unwrap(),
            Totals {
                price: 155,
                calories: 30
            }
        );

        order.remove_topping("mayo").unwrap();
        assert_eq!(calculate_price(&order).unwrap(), 135);
        assert_eq!(calculate_calories(&order).unwrap(), 25);
    }

    #[test]
    fn test_totals_with_resolved_toppings() {
        let order = Order::new(Size::Small, Stuffing::Cheese);
        assert_eq!(
            totals_with(&order, &[Topping::Mayo, Topping::Spice]),
            Totals {
                price: 95,
                calories: 45
            }
        );
        assert_eq!(totals_with(&order, &[]), calculate_totals(&order).unwrap());
    }

    #[test]
    fn test_unknown_topping_propagates() {
        let mut order = Order::new(Size::Small, Stuffing::Potato);
        order.add_topping("pickles").unwrap();
        assert!(matches!(
            calculate_calories(&order),
            Err(OrderError::InvalidTopping(_))
        ));
        assert!(calculate_totals(&order).is_err());
    }
}
