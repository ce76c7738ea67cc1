//! Product catalog entry point
//!
//! Parses CLI arguments and dispatches via `cli::run`. Errors are printed to
//! stderr and the process exits non-zero.

use product_catalog::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
