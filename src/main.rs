//! # octoscout - Main Entry Point
//!
//! Wires the three halves together: parses the CLI, builds the GitHub
//! client, then runs the TUI on its own thread while the tokio runtime
//! serves fetch requests. The initial query is issued before the UI
//! starts, so the list populates on first paint.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use octoscout::cli::Args;
use octoscout::fetch;
use octoscout::github::{GithubClient, GithubConfig};
use octoscout::tui::{self, App};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            EXIT_ERROR
        }
    });
}

#[tokio::main]
async fn run() -> Result<()> {
    let args = Args::parse();

    let client = GithubClient::new(&GithubConfig {
        api_base: args.api_base.clone(),
        token: args.token.clone(),
        timeout: Duration::from_secs(args.timeout),
    })
    .context("failed to build HTTP client")?;

    if !args.quiet {
        println!("octoscout v{}", env!("CARGO_PKG_VERSION"));
        println!("api: {}", args.api_base);
        println!("query: {}", args.query);
    }

    let (request_tx, request_rx) = tokio::sync::mpsc::channel(64);
    let (outcome_tx, outcome_rx) = crossbeam_channel::bounded(256);

    // Issue the startup search before the UI thread takes the app over.
    let mut app = App::new(args.countdown);
    let initial = app.commit_phrase(args.query.clone());
    request_tx.send(initial).await.context("fetch runtime unavailable at startup")?;

    // The UI gets the only request sender; dropping it on exit is what
    // shuts the dispatch loop down.
    let ui = std::thread::spawn(move || tui::run(app, &outcome_rx, &request_tx));

    fetch::run_dispatch(client, request_rx, outcome_tx).await;

    match ui.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow!("UI thread panicked")),
    }
}
