//! Chat room server binary.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tamariba-server
//! ```

use clap::Parser;

use tamariba::logger::setup_logger;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command(name = "tamariba-server", about = "Code-addressed realtime chat room server")]
struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = tamariba::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
