//! # Seed Data Generator
//!
//! Populates the database with sample inventory items for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 items (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p inventory-db --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p inventory-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! Each item gets a name of the form `{Product} {Variant}`, a stock level
//! between 0 and 250 and a unit price between 0.50 and 49.99.

use std::env;

use inventory_core::ItemPayload;
use inventory_db::{Database, DbConfig};

/// Base product names
const PRODUCTS: &[&str] = &[
    "Hex Bolt",
    "Wood Screw",
    "Wall Anchor",
    "Hinge",
    "Cable Tie",
    "Washer",
    "Lock Nut",
    "Drawer Slide",
    "Shelf Bracket",
    "Pipe Clamp",
    "Drill Bit",
    "Sanding Disc",
];

/// Variants appended to each product name
const VARIANTS: &[&str] = &["M4", "M6", "M8", "Small", "Medium", "Large", "Zinc", "Steel"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./inventory.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of items to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventory.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Inventory Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Items:    {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let existing = db.items().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} items", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let payload = generate_item(seed);

        if let Err(e) = db.items().insert(&payload).await {
            eprintln!("Failed to insert {}: {}", payload.name, e);
            continue;
        }

        generated += 1;
    }

    println!();
    println!("✓ Generated {} items in {:?}", generated, start.elapsed());

    db.close().await;
    Ok(())
}

/// Generates a deterministic item from its sequence number.
fn generate_item(seed: usize) -> ItemPayload {
    let product = PRODUCTS[seed % PRODUCTS.len()];
    let variant = VARIANTS[(seed / PRODUCTS.len()) % VARIANTS.len()];

    // Stock 0-250, price 0.50-49.99
    let quantity = ((seed * 37) % 251) as i32;
    let cents = 50 + (seed * 113) % 4950;

    ItemPayload {
        name: format!("{} {}", product, variant),
        quantity,
        unit_price: cents as f64 / 100.0,
    }
}
