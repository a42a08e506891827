use clap::{Parser, Subcommand};

/// burger — Build a burger order and see what it costs.
#[derive(Parser, Debug)]
#[command(name = "burger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Walk through a sample order, including rejected operations.
    #[default]
    Demo,

    /// Show every size, stuffing and topping with price and calories.
    Menu {
        /// Print as CSV instead of a table.
        #[arg(long)]
        csv: bool,
    },

    /// Build an order and print its totals.
    Build {
        /// Burger size (small, large).
        #[arg(long)]
        size: String,

        /// Stuffing (cheese, salad, potato).
        #[arg(long)]
        stuffing: String,

        /// Topping to add; repeat for more than one.
        #[arg(long = "topping")]
        toppings: Vec<String>,

        /// Print the order as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a random order.
    Random {
        /// Random seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the order as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_demo() {
        let cli = Cli::parse_from(["burger"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Demo));
    }

    #[test]
    fn test_build_collects_repeated_toppings() {
        let cli = Cli::parse_from([
            "burger", "build", "--size", "small", "--stuffing", "cheese", "--topping", "mayo",
            "--topping", "spice",
        ]);
        match cli.command {
            Some(Command::Build { toppings, json, .. }) => {
                assert_eq!(toppings, vec!["mayo", "spice"]);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
