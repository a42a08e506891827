use rand::Rng;

use crate::catalog::{Size, Stuffing, Topping};
use crate::error::Result;
use crate::models::Order;

/// Build an order with a random size, stuffing and subset of toppings.
pub fn random_order(rng: &mut impl Rng) -> Result<Order> {
    let size = Size::ALL[rng.gen_range(0..Size::ALL.len())];
    let stuffing = Stuffing::ALL[rng.gen_range(0..Stuffing::ALL.len())];

    let toppings: Vec<&str> = Topping::ALL
        .into_iter()
        .filter(|_| rng.gen_bool(0.5))
        .map(Topping::name)
        .collect();

    let mut order = Order::new(size, stuffing);
    order.replace_toppings(toppings)?;
    Ok(order)
}
