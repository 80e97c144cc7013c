//! Run with: cargo run --bin clear-db
//!
//! Permanently deletes every user, business and deal.

use minglin::config::{database::DatabaseConfig, logging};
use minglin::services::reset;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    logging::init();

    let outcome = reset::run_configured(DatabaseConfig::from_env()).await;
    ExitCode::from(reset::exit_code(&outcome))
}
