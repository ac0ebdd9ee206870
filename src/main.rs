//! Carbon Basket demo entry point
//!
//! Usage: `carbon-basket [catalog.json] [+id|-id ...]`
//!
//! Loads a catalog (or a small built-in one), applies the commands in order
//! and prints what a presentation layer would show after each one.

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use carbon_basket::basket::SpawnedInstance;
    use carbon_basket::{ItemView, PresentationSink, TotalsView};

    /// Prints updates to stdout
    #[derive(Default)]
    pub struct ConsoleSink;

    impl PresentationSink for ConsoleSink {
        fn item_changed(&mut self, view: &ItemView) {
            println!(
                "  {:<12} x{:<3} {:>12} {:>10}",
                view.name,
                view.count_label(),
                view.carbon_label(),
                view.calories_label()
            );
        }

        fn totals_changed(&mut self, view: &TotalsView) {
            println!(
                "  {} ({:.0}%)  {} ({:.0}%)  {}",
                view.total_carbon_label(),
                view.carbon_fill() * 100.0,
                view.calories_label(),
                view.calorie_fill() * 100.0,
                view.warning_label()
            );
        }

        fn layout_changed(&mut self, instances: &[SpawnedInstance]) {
            log::debug!("Layout: {} instances", instances.len());
            for inst in instances {
                log::trace!(
                    "  #{} {} slot {} at ({:.2}, {:.2})",
                    inst.id.0,
                    inst.item,
                    inst.slot,
                    inst.position.x,
                    inst.position.y
                );
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn sample_config() -> carbon_basket::BasketConfig {
    use carbon_basket::basket::Item;

    carbon_basket::BasketConfig {
        settings: Default::default(),
        items: vec![
            Item::new("apple", "Apple", 200, 95),
            Item::new("banana", "Banana", 110, 105),
            Item::new("beef", "Beef", 12_000, 250),
            Item::new("cheese", "Cheese", 2_400, 400),
            Item::new("rice", "Rice", 400, 200),
        ],
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use carbon_basket::{BasketConfig, BasketTracker, Command};

    env_logger::init();
    log::info!("Carbon Basket (native) starting...");

    let mut args = std::env::args().skip(1).peekable();
    let config_path = args.peek().filter(|a| a.ends_with(".json")).cloned();
    let config = match config_path {
        Some(path) => {
            args.next();
            match BasketConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => sample_config(),
    };

    println!("Initial basket:");
    let mut tracker = match BasketTracker::from_config(&config, console::ConsoleSink) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for arg in args {
        let command: Command = match arg.parse() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("Skipping: {e}");
                continue;
            }
        };
        println!("{command}:");
        match tracker.handle(&command) {
            Ok(update) if !update.changed => println!("  (no {} to remove)", update.item),
            Ok(_) => {}
            Err(e) => eprintln!("  {e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; the host drives BasketTracker directly
}
