//! needs-attention CLI entry point.

use clap::Parser;

use needs_attention::cli::{commands::report, handle_error, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = report::execute(cli).await {
        handle_error(err, json_mode);
    }
}
