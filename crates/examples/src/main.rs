//! Assembles a transfer and broadcasts it with `broadcast_tx_sync`.
//!
//! ```text
//! RUST_LOG=debug cargo run -p examples --bin send_transaction
//! ```
//!
//! With the default unfunded address the chain answers with code 5
//! (insufficient funds), which shows the envelope was parsed.

use examples::ExampleSettings;
use thor_rust_sdk::client::rpc::{Broadcaster, ThorRpcClient};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let settings = ExampleSettings::from_env();
    info!(from = %settings.from, to = %settings.to, memo = %settings.memo, "Creating transaction");

    let encoded = settings.assembler().assemble()?;
    info!(length = encoded.len(), "Transaction created");

    let client = ThorRpcClient::builder(settings.network()?).build()?;
    let result = client.broadcast_tx_sync(&encoded).await?;

    match result.rejection() {
        None => println!("Accepted, hash {}", result.hash),
        Some(rejection) => println!(
            "Rejected by chain: code {} ({}) hash {}: {}",
            rejection.code, rejection.codespace, rejection.hash, rejection.log
        ),
    }

    Ok(())
}
