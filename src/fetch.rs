//! Fetch runtime bridging the UI thread and the GitHub client.
//!
//! The UI thread emits [`FetchRequest`] values over a tokio mpsc channel;
//! the dispatch loop spawns one task per request and delivers a
//! [`FetchOutcome`] back over a crossbeam channel the UI drains between
//! redraws. Requests are fire-and-forget: nothing in flight is ever
//! cancelled, so every request carries a sequence number and the UI
//! discards outcomes that a newer request has superseded.

use crossbeam_channel::Sender;
use log::{debug, warn};
use tokio::sync::mpsc::Receiver;

use crate::domain::{AccountProfile, AccountSummary, GithubError};
use crate::github::GithubClient;

/// A retrieval the UI wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Search accounts for a committed phrase.
    Search { phrase: String, seq: u64 },
    /// Fetch the profile of a selected account.
    Profile { login: String, seq: u64 },
}

/// The resolution of a [`FetchRequest`], tagged with its sequence number.
#[derive(Debug)]
pub enum FetchOutcome {
    Search { seq: u64, result: Result<Vec<AccountSummary>, GithubError> },
    Profile { seq: u64, login: String, result: Result<AccountProfile, GithubError> },
}

/// Serve requests until every sender is dropped (the UI thread exiting).
///
/// Each request runs in its own spawned task so a slow profile lookup
/// never delays a search and resolution order is deliberately unordered.
pub async fn run_dispatch(
    client: GithubClient,
    mut requests: Receiver<FetchRequest>,
    outcomes: Sender<FetchOutcome>,
) {
    while let Some(request) = requests.recv().await {
        let client = client.clone();
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let outcome = serve(&client, request).await;
            // The UI may already be gone during shutdown.
            if outcomes.send(outcome).is_err() {
                debug!("dropping fetch outcome, UI receiver closed");
            }
        });
    }
    debug!("request channel closed, fetch dispatch stopping");
}

async fn serve(client: &GithubClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Search { phrase, seq } => {
            let result = client.search_accounts(&phrase).await;
            if let Err(e) = &result {
                warn!("search \"{phrase}\" failed: {e}");
            }
            FetchOutcome::Search { seq, result }
        }
        FetchRequest::Profile { login, seq } => {
            let result = client.fetch_profile(&login).await;
            if let Err(e) = &result {
                warn!("profile fetch for {login} failed: {e}");
            }
            FetchOutcome::Profile { seq, login, result }
        }
    }
}
