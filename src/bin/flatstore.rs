//! FlatStore CLI
//!
//! Create, append to and list a flat product store.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use flatstore::config::SyncStrategy;
use flatstore::store::ScanResult;
use flatstore::{Config, Product, RecordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// FlatStore CLI
#[derive(Parser, Debug)]
#[command(name = "flatstore")]
#[command(about = "Fixed-layout binary product store")]
#[command(version)]
struct Args {
    /// Store file
    #[arg(short, long, default_value = "inventar.bin")]
    file: PathBuf,

    /// fsync after every append
    #[arg(long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create (or truncate) the store
    Init,

    /// Append a product
    Add {
        /// Product code
        #[arg(long)]
        code: u32,

        /// Product name (truncated to 59 bytes)
        #[arg(long)]
        name: String,

        /// Category (truncated to 29 bytes)
        #[arg(long)]
        category: String,

        /// Unit price
        #[arg(long)]
        price: f32,

        /// Units in stock
        #[arg(long)]
        stock: u32,
    },

    /// List active products and the total inventory value
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Look up an active product by code
    Find {
        /// Product code
        code: u32,
    },

    /// Show header fields and record counts
    Info,

    /// Create the store, append the sample products and list them
    Demo,
}

fn main() {
    // Logs go to stderr so listings stay clean on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flatstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let sync_strategy = if args.sync {
        SyncStrategy::EveryAppend
    } else {
        SyncStrategy::Never
    };
    let config = Config::builder().sync_strategy(sync_strategy).build();
    let store = RecordStore::with_config(&args.file, config);

    if let Err(e) = run(&store, args.command) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(store: &RecordStore, command: Commands) -> flatstore::Result<()> {
    match command {
        Commands::Init => {
            store.create()?;
            println!("Created {}", store.path().display());
        }
        Commands::Add {
            code,
            name,
            category,
            price,
            stock,
        } => {
            let product = Product::new(code, name, category, price, stock);
            let index = store.append(&product)?;
            println!("Added: {} (record #{})", product.name, index);
        }
        Commands::List { json } => {
            let result = store.scan()?.collect_all()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&JsonListing::from(&result))?);
            } else {
                print_table(&result);
            }
        }
        Commands::Find { code } => match store.find(code)? {
            Some(product) => print_table_row(&product),
            None => println!("Product {} not found", code),
        },
        Commands::Info => {
            let info = store.info()?;
            println!("File:          {}", store.path().display());
            println!("Magic:         0x{:08X}", info.header.magic);
            println!("Version:       {}", info.header.version);
            println!("Records:       {}", info.header.record_count);
            println!("  active:      {}", info.active);
            println!("  inactive:    {}", info.inactive);
            println!("Created at:    {}", info.header.created_at);
            println!("Modified at:   {}", info.header.modified_at);
            println!("Total value:   {:.2}", info.total_value);
            if !info.is_consistent() {
                println!(
                    "Warning: file is {} bytes, header implies {}",
                    info.file_len, info.expected_len
                );
            }
        }
        Commands::Demo => {
            store.create()?;
            for product in sample_products() {
                store.append(&product)?;
                println!("Added: {}", product.name);
            }
            print_table(&store.scan()?.collect_all()?);
        }
    }
    Ok(())
}

// =============================================================================
// Output
// =============================================================================

const RULE: &str =
    "─────────────────────────────────────────────────────────────────────────────────";

fn print_table(result: &ScanResult) {
    println!();
    println!(
        "{:<10} {:<40} {:<15} {:>10} {:>8}",
        "CODE", "NAME", "CATEGORY", "PRICE", "STOCK"
    );
    println!("{}", RULE);
    for product in &result.products {
        print_table_row(product);
    }
    println!("{}", RULE);
    println!("Active products: {}", result.summary.active);
    println!("Total inventory value: {:.2}", result.summary.total_value);
}

fn print_table_row(product: &Product) {
    println!(
        "{:<10} {:<40} {:<15} {:>10.2} {:>8}",
        product.code, product.name, product.category, product.price, product.stock
    );
}

#[derive(serde::Serialize)]
struct JsonListing<'a> {
    record_count: u32,
    modified_at: u64,
    products: &'a [Product],
    summary: flatstore::store::ScanSummary,
}

impl<'a> From<&'a ScanResult> for JsonListing<'a> {
    fn from(result: &'a ScanResult) -> Self {
        Self {
            record_count: result.header.record_count,
            modified_at: result.header.modified_at,
            products: &result.products,
            summary: result.summary,
        }
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new(100001, "Laptop ASUS ROG", "Electronice", 4500.00, 15),
        Product::new(100002, "Mouse Logitech MX", "Periferice", 350.00, 50),
        Product::new(100003, "Monitor Dell 27\"", "Electronice", 1200.00, 20),
        Product::new(100004, "Tastatură Mecanică", "Periferice", 450.00, 30),
        Product::new(100005, "SSD Samsung 1TB", "Stocare", 550.00, 100),
    ]
}
