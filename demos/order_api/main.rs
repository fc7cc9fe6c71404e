//! Order API Example
//!
//! Serves the order CRUD surface on top of the in-memory store, seeded from
//! a YAML config file.
//!
//! ```text
//! ORDERS_CONFIG=demos/order_api/orders.yaml cargo run --example order_api
//! ```

use order_desk::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "demos/order_api/orders.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::var("ORDERS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let config = OrdersConfig::from_yaml_file(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let address = config.bind_address()?.to_string();
    tracing::info!(
        config = %path,
        seed_orders = config.seed_orders.len(),
        "starting order service"
    );

    println!("\n🌐 Server running on http://{}", address);
    println!("\n  🔷 Order Routes:");
    println!("    GET    /orders               - List all orders");
    println!("    POST   /orders               - Create a new order");
    println!("    GET    /orders/{{orderId}}     - Get a specific order");
    println!("    PUT    /orders/{{orderId}}     - Replace an order");
    println!("    DELETE /orders/{{orderId}}     - Delete a pending order");

    ServerBuilder::new()
        .with_store(InMemoryOrderStore::from_config(&config))
        .serve(&address)
        .await
}
