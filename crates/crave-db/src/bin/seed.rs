//! # Seed Data Generator
//!
//! Populates the database with menu items and a demo customer for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p crave-db --bin seed
//!
//! # Specify database path
//! cargo run -p crave-db --bin seed -- --db ./data/crave.db
//! ```
//!
//! ## Generated Data
//! - One menu item per entry in the built-in menu below
//! - A demo customer linked to auth user id `demo-user`

use chrono::Utc;
use std::env;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crave_core::validation::validate_price_cents;
use crave_core::{Customer, MenuItem};
use crave_db::{Database, DbConfig};

/// The development menu: (category, name, description, price in cents)
const MENU: &[(&str, &str, &str, i64)] = &[
    ("starters", "Garlic Bread", "Toasted sourdough, roast garlic butter", 499),
    ("starters", "Tomato Soup", "San Marzano tomatoes, basil oil", 599),
    ("starters", "Caesar Salad", "Gem lettuce, anchovy dressing, croutons", 799),
    ("mains", "Margherita Pizza", "Fior di latte, basil, olive oil", 1099),
    ("mains", "Pepperoni Pizza", "Spicy pepperoni, chili honey", 1299),
    ("mains", "Smash Burger", "Double patty, cheddar, pickles", 1199),
    ("mains", "Pad Thai", "Rice noodles, tamarind, peanuts", 1150),
    ("mains", "Mushroom Risotto", "Porcini, parmesan, thyme", 1350),
    ("sides", "Fries", "Skin-on, sea salt", 399),
    ("sides", "Slaw", "Cabbage, carrot, buttermilk dressing", 349),
    ("desserts", "Tiramisu", "Espresso-soaked savoiardi, mascarpone", 649),
    ("desserts", "Chocolate Brownie", "Warm, with vanilla ice cream", 599),
    ("drinks", "Lemonade", "Fresh-squeezed, house-made", 349),
    ("drinks", "Iced Tea", "Black tea, lemon", 299),
    ("drinks", "Sparkling Water", "750ml bottle", 249),
];

/// Auth user id for the demo customer.
const DEMO_USER_ID: &str = "demo-user";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./crave_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Crave Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./crave_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Crave Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Skip when data is already present
    let existing = db.menu().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} menu items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding menu...");

    let now = Utc::now();
    let mut seeded = 0;

    for (category, name, description, price_cents) in MENU {
        validate_price_cents(*price_cents)?;

        let item = MenuItem {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            description: Some((*description).to_string()),
            price_cents: *price_cents,
            category: Some((*category).to_string()),
            is_available: true,
            created_at: now,
            updated_at: now,
        };

        if let Err(e) = db.menu().insert(&item).await {
            eprintln!("Failed to insert {}: {}", item.name, e);
            continue;
        }
        seeded += 1;
    }

    println!("✓ Seeded {} menu items", seeded);

    // Demo customer for checkout flows against the dev database
    if db.customers().find_by_user_id(DEMO_USER_ID).await?.is_none() {
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            user_id: DEMO_USER_ID.to_string(),
            full_name: "Demo Customer".to_string(),
            email: "demo@crave.test".to_string(),
            phone: Some("+1 555 010 0000".to_string()),
            created_at: now,
        };
        db.customers().insert(&customer).await?;
        println!("✓ Seeded demo customer (user id: {})", DEMO_USER_ID);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
