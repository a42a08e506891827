use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use burger_order_rs::catalog::{CatalogItem, Size, Stuffing, Topping};
use burger_order_rs::cli::{Cli, Command};
use burger_order_rs::error::Result;
use burger_order_rs::interface::{display_menu, display_receipt, summary_json, write_menu_csv};
use burger_order_rs::models::Order;
use burger_order_rs::pricing::random_order;
use burger_order_rs::validation::{parse_size, parse_stuffing};

fn main() {
    // Logs go to stderr so CSV/JSON on stdout stays machine-readable.
    // Override with RUST_LOG, e.g. RUST_LOG=burger_order_rs=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,burger_order_rs=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Demo => cmd_demo(),
        Command::Menu { csv } => cmd_menu(csv),
        Command::Build {
            size,
            stuffing,
            toppings,
            json,
        } => cmd_build(&size, &stuffing, &toppings, json),
        Command::Random { seed, json } => cmd_random(seed, json),
    }
}

/// Replay a sample order, then show each kind of rejected operation.
fn cmd_demo() -> Result<()> {
    // Small burger with cheese, plus mayo.
    let mut order = Order::new(Size::Small, Stuffing::Cheese);
    order.add_topping("mayo")?;
    println!("Calories: {}", order.calculate_calories()?);
    println!("Price: {}", order.calculate_price()?);

    // Changed my mind, add spice too.
    order.add_topping("spice")?;
    println!("Price with spice: {}", order.calculate_price()?);
    println!("Is large: {}", order.is_large());

    order.remove_topping("spice")?;
    println!("Have {} toppings", order.toppings()?.len());

    println!();
    report("No size or stuffing", Order::try_new(None, None).map(|_| ()));

    let spice = Some(CatalogItem::from(Topping::Spice));
    report("Topping given as size", Order::try_new(spice, spice).map(|_| ()));

    let mut second = Order::new(Size::Small, Stuffing::Cheese);
    second.add_topping("mayo")?;
    report("Same topping twice", second.add_topping("mayo"));
    report("Removing absent topping", second.remove_topping("spice"));

    second.add_topping("ketchup")?;
    report("Pricing unknown topping", second.calculate_price().map(|_| ()));

    Ok(())
}

fn report(label: &str, outcome: Result<()>) {
    match outcome {
        Ok(()) => println!("{}: accepted", label),
        Err(e) => println!("{}: rejected ({})", label, e),
    }
}

/// Print the catalog.
fn cmd_menu(csv: bool) -> Result<()> {
    if csv {
        write_menu_csv(io::stdout())
    } else {
        display_menu();
        Ok(())
    }
}

/// Build an order from command-line names and print it.
fn cmd_build(size: &str, stuffing: &str, toppings: &[String], json: bool) -> Result<()> {
    let mut order = Order::new(parse_size(size)?, parse_stuffing(stuffing)?);
    for topping in toppings {
        order.add_topping(topping.as_str())?;
    }

    print_order(&order, json)
}

/// Build a random order and print it.
fn cmd_random(seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let order = random_order(&mut rng)?;
    info!(size = %order.size(), stuffing = %order.stuffing(), "random order built");

    print_order(&order, json)
}

fn print_order(order: &Order, json: bool) -> Result<()> {
    let summary = order.summary()?;
    if json {
        println!("{}", summary_json(&summary)?);
    } else {
        display_receipt(&summary);
    }
    Ok(())
}
