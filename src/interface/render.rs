use crate::catalog::{CatalogItem, Size, Stuffing, Topping};
use crate::models::OrderSummary;

/// Every catalog option in menu order.
pub(crate) fn menu_items() -> Vec<CatalogItem> {
    Size::ALL
        .into_iter()
        .map(CatalogItem::from)
        .chain(Stuffing::ALL.into_iter().map(CatalogItem::from))
        .chain(Topping::ALL.into_iter().map(CatalogItem::from))
        .collect()
}

/// Group label and option name for a menu row.
pub(crate) fn menu_labels(item: CatalogItem) -> (&'static str, &'static str) {
    match item {
        CatalogItem::Size(s) => ("size", s.name()),
        CatalogItem::Stuffing(s) => ("stuffing", s.name()),
        CatalogItem::Topping(t) => ("topping", t.name()),
    }
}

/// Display the catalog as a table.
pub fn display_menu() {
    println!();
    println!("=== Menu ===");
    println!();

    for item in menu_items() {
        let (group, name) = menu_labels(item);
        let entry = item.entry();
        println!(
            "  {:<9} {:<7} {:>4} | {:>3} cal",
            group,
            name,
            entry.price(),
            entry.calories()
        );
    }

    println!();
}

/// Display an order with one line per component and the totals.
pub fn display_receipt(summary: &OrderSummary) {
    println!();
    println!("=== Order ===");
    println!();

    let size = summary.size.entry();
    let stuffing = summary.stuffing.entry();
    println!(
        "  size      {:<7} {:>4} | {:>3} cal",
        summary.size,
        size.price(),
        size.calories()
    );
    println!(
        "  stuffing  {:<7} {:>4} | {:>3} cal",
        summary.stuffing,
        stuffing.price(),
        stuffing.calories()
    );

    if summary.toppings.is_empty() {
        println!("  (no toppings)");
    }
    for topping in &summary.toppings {
        let entry = topping.entry();
        println!(
            "  topping   {:<7} {:>4} | {:>3} cal",
            topping,
            entry.price(),
            entry.calories()
        );
    }

    println!();
    println!("--- Totals ---");
    println!("Price: {}", summary.price);
    println!("Calories: {}", summary.calories);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_option_once() {
        let items = menu_items();
        assert_eq!(items.len(), 7);
        assert_eq!(menu_labels(items[0]), ("size", "small"));
        assert_eq!(menu_labels(items[6]), ("topping", "spice"));
    }
}
