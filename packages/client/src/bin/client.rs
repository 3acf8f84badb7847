//! Interactive terminal client for the Roomcast chat relay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomcast-client -- --name alice --room lobby
//! ```

use clap::Parser;
use roomcast_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "roomcast-client", version, about = "Roomcast chat client")]
struct Args {
    /// WebSocket endpoint of the relay
    #[arg(long, default_value = "ws://127.0.0.1:3500/ws")]
    url: String,

    /// Display name
    #[arg(short, long)]
    name: String,

    /// Room to enter
    #[arg(short, long, default_value = "lobby")]
    room: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Keep the terminal quiet unless RUST_LOG says otherwise
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    if let Err(e) = roomcast_client::run_client(&args.url, args.name, args.room).await {
        tracing::error!("Client error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
