use serde::Serialize;

use crate::catalog::{Size, Stuffing, Topping};
use crate::error::Result;
use crate::models::Order;
use crate::pricing::calculations::totals_with;

/// Point-in-time view of an order with its resolved toppings and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub size: Size,
    pub stuffing: Stuffing,
    pub toppings: Vec<Topping>,
    pub price: u32,
    pub calories: u32,
}

impl OrderSummary {
    pub fn from_order(order: &Order) -> Result<Self> {
        let toppings = order.toppings()?;
        let totals = totals_with(order, &toppings);
        Ok(Self {
            size: order.size(),
            stuffing: order.stuffing(),
            toppings,
            price: totals.price,
            calories: totals.calories,
        })
    }
}
