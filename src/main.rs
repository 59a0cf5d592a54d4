//! Token Doctor CLI - one-shot honeypot check
//!
//! Reads the same environment as the API server, runs one simulation and
//! prints the report as JSON. The exit code is 0 whatever the risk level.

use clap::Parser;
use eyre::Result;
use token_doctor::utils::constants::DEFAULT_V3_FEE_TIER;
use token_doctor::TokenSimulator;
use tracing_subscriber::EnvFilter;

/// Check whether a token can be bought and sold back, and at what tax
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Token contract address to check
    #[arg(value_name = "TOKEN_ADDRESS")]
    token: String,

    /// Route through the V2 router instead of V3
    #[arg(long)]
    v2: bool,

    /// V3 fee tier (ignored with --v2)
    #[arg(short, long, default_value_t = DEFAULT_V3_FEE_TIER)]
    fee: u32,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "token_doctor=debug" } else { "token_doctor=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let simulator = TokenSimulator::from_env();
    let report = simulator.simulate(&args.token, !args.v2, args.fee).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("{}", report.summary());

    Ok(())
}
