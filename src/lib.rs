//! # octoscout - GitHub account finder for the terminal
//!
//! octoscout is a small interactive TUI for looking up GitHub accounts.
//! A committed search phrase drives a result list; selecting an account
//! fetches its profile, which stays on screen for a fixed countdown and
//! then clears itself until the next selection.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────┐      ┌─────────────────────────────┐
//! │  UI thread (tui)             │      │  Fetch runtime (tokio)      │
//! │                              │      │                             │
//! │  keys ─▶ App state machine ──┼──────┼─▶ one task per request      │
//! │             ▲                │ reqs │        │                    │
//! │             │ outcomes       │      │  GithubClient (reqwest)     │
//! │  countdown timer, redraw ◀───┼──────┼────────┘                    │
//! └──────────────────────────────┘      └─────────────────────────────┘
//! ```
//!
//! The UI thread owns all view state. Retrievals are fire-and-forget:
//! nothing in flight is cancelled, so every request carries a sequence
//! number and the state machine discards outcomes a newer request has
//! superseded (last-issued-wins). The countdown is a scoped resource of
//! the detail panel: armed on selection, disarmed on clear or expiry,
//! never left ticking against a blank panel.
//!
//! ## Module Structure
//!
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Account types and error definitions
//! - [`github`]: HTTP client for the two GitHub endpoints
//! - [`fetch`]: Request/outcome types and the dispatch loop
//! - [`tui`]: Terminal UI, event loop, and the application state machine
//!
//! ## Typical Usage
//!
//! ```bash
//! # Search interactively, starting from a query
//! octoscout tokio
//!
//! # Keep selected profiles on screen longer
//! octoscout --countdown 10
//! ```

pub mod cli;
pub mod domain;
pub mod fetch;
pub mod github;
pub mod tui;
