//! Catalog CLI - serve the product API over HTTP or work the store directly

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use catalog::config;
use catalog::product::{Product, ProductDraft};
use catalog::server;
use catalog::storage::SqliteStore;
use catalog::ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version = "0.1.0")]
#[command(about = "Product catalog CRUD service backed by SQLite")]
#[command(long_about = r#"
Catalog stores products (name, description, price) in a SQLite file and
exposes them as a REST API:

  POST   /products       create a product
  GET    /products       list all products
  GET    /products/{id}  fetch one product
  PUT    /products/{id}  overwrite a product
  DELETE /products/{id}  remove a product

Example usage:
  catalog serve --port 3000
  catalog add --name "Pen" --description "Blue ink" --price 1.5
  catalog list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides config; default 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file (overrides config; default products.db)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the config file (default catalog.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Add a product to the store
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product description
        #[arg(long)]
        description: Option<String>,

        /// Product price
        #[arg(short, long)]
        price: f64,

        /// Path to the database file
        #[arg(short, long, default_value = "products.db")]
        database: PathBuf,
    },

    /// List all products
    List {
        /// Path to the database file
        #[arg(short, long, default_value = "products.db")]
        database: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Fetch a single product by id
    Get {
        /// Product id
        #[arg(short, long)]
        id: i64,

        /// Path to the database file
        #[arg(short, long, default_value = "products.db")]
        database: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Overwrite a product's name, description and price
    Update {
        /// Product id
        #[arg(short, long)]
        id: i64,

        /// New product name
        #[arg(short, long)]
        name: String,

        /// New product description
        #[arg(long)]
        description: Option<String>,

        /// New product price
        #[arg(short, long)]
        price: f64,

        /// Path to the database file
        #[arg(short, long, default_value = "products.db")]
        database: PathBuf,
    },

    /// Remove a product from the store
    Remove {
        /// Product id
        #[arg(short, long)]
        id: i64,

        /// Path to the database file
        #[arg(short, long, default_value = "products.db")]
        database: PathBuf,
    },

    /// Show statistics about the store
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "products.db")]
        database: PathBuf,
    },
}

fn print_product(product: &Product) {
    println!("📦 Product {}", product.id);
    println!("   Name: {}", product.name.bold());
    println!(
        "   Description: {}",
        product.description.as_deref().unwrap_or("-")
    );
    println!("   Price: {:.2}", product.price);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, database, config } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();

            let port = port
                .or(file_config.port)
                .unwrap_or_else(config::default_port);
            let database = database
                .or(file_config.database.map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);

            config::ensure_db_dir(&database)?;

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::start_server(port, database))?;
        }

        Commands::Add { name, description, price, database } => {
            let store = SqliteStore::open(&database)?;
            let draft = ProductDraft::new(name, description, price);
            let id = store.insert_product(&draft)?;

            println!("✅ Created product {}", id);
        }

        Commands::List { database, format } => {
            let store = SqliteStore::open(&database)?;
            let products = store.list_products()?;

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else if products.is_empty() {
                println!("∅ No products in {:?}.", database);
            } else {
                println!("{}", ui::products_table(&products));
            }
        }

        Commands::Get { id, database, format } => {
            let store = SqliteStore::open(&database)?;

            match store.get_product(id)? {
                Some(product) => {
                    if format == "json" {
                        println!("{}", serde_json::to_string_pretty(&product)?);
                    } else {
                        print_product(&product);
                    }
                }
                None => {
                    println!("∅ No product with id {}.", id);
                }
            }
        }

        Commands::Update { id, name, description, price, database } => {
            let store = SqliteStore::open(&database)?;
            let draft = ProductDraft::new(name, description, price);
            let affected = store.update_product(id, &draft)?;

            if affected == 0 {
                println!("∅ No product with id {}.", id);
            } else {
                println!("✅ Updated product {}", id);
            }
        }

        Commands::Remove { id, database } => {
            let store = SqliteStore::open(&database)?;
            let affected = store.delete_product(id)?;

            if affected == 0 {
                println!("∅ No product with id {}.", id);
            } else {
                println!("✅ Removed product {}", id);
            }
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;
            let stats = store.stats()?;

            println!("📊 Catalog Statistics ({:?})", database);
            println!("------------------------------------");
            println!("{}", stats);
        }
    }

    Ok(())
}
