use std::io::Write;

use crate::error::Result;
use crate::interface::render::{menu_items, menu_labels};
use crate::models::OrderSummary;

/// Write the catalog as CSV: `group,name,price,calories`.
pub fn write_menu_csv<W: Write>(writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["group", "name", "price", "calories"])?;

    for item in menu_items() {
        let (group, name) = menu_labels(item);
        let entry = item.entry();
        wtr.write_record([
            group.to_string(),
            name.to_string(),
            entry.price().to_string(),
            entry.calories().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON for an order summary.
pub fn summary_json(summary: &OrderSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Size, Stuffing};
    use crate::models::Order;

    #[test]
    fn test_menu_csv() {
        let mut buf = Vec::new();
        write_menu_csv(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "group,name,price,calories");
        assert_eq!(lines[1], "size,small,50,20");
        assert!(lines.contains(&"topping,mayo,20,5"));
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_summary_json() {
        let mut order = Order::new(Size::Small, Stuffing::Cheese);
        order.add_topping("mayo").unwrap();

        let json = summary_json(&order.summary().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["price"], 80);
        assert_eq!(value["calories"], 45);
        assert_eq!(value["toppings"], serde_json::json!(["mayo"]));
    }
}
