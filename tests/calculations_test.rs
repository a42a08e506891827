use burger_order_rs::catalog::{Size, Stuffing, Topping};
use burger_order_rs::models::Order;
use burger_order_rs::pricing::{calculate_calories, calculate_price};

#[test]
fn test_small_cheese_walkthrough() {
    let mut order = Order::new(Size::Small, Stuffing::Cheese);
    assert_eq!(order.calculate_price().unwrap(), 60);
    assert_eq!(order.calculate_calories().unwrap(), 40);

    order.add_topping("mayo").unwrap();
    assert_eq!(order.calculate_price().unwrap(), 80);
    assert_eq!(order.calculate_calories().unwrap(), 45);

    order.add_topping("spice").unwrap();
    assert_eq!(order.calculate_price().unwrap(), 95);
    assert_eq!(order.calculate_calories().unwrap(), 45);
    assert!(!order.is_large());
    assert_ne!(order.size(), Size::Large);

    order.remove_topping("spice").unwrap();
    assert_eq!(order.calculate_price().unwrap(), 80);
    assert_eq!(order.calculate_calories().unwrap(), 45);
    assert_eq!(order.toppings().unwrap().len(), 1);
}

#[test]
fn test_every_base_combination() {
    for size in Size::ALL {
        for stuffing in Stuffing::ALL {
            let order = Order::new(size, stuffing);
            assert_eq!(
                calculate_price(&order).unwrap(),
                size.entry().price() + stuffing.entry().price()
            );
            assert_eq!(
                calculate_calories(&order).unwrap(),
                size.entry().calories() + stuffing.entry().calories()
            );
        }
    }
}

#[test]
fn test_all_toppings_added() {
    let mut order = Order::new(Size::Large, Stuffing::Potato);
    for topping in Topping::ALL {
        order.add_topping(topping.name()).unwrap();
    }

    // 100 + 15 + 20 + 15, 20 + 10 + 5 + 0
    assert_eq!(order.calculate_price().unwrap(), 150);
    assert_eq!(order.calculate_calories().unwrap(), 35);
    assert_eq!(order.toppings().unwrap(), Topping::ALL.to_vec());
}
