//! GitHub REST API access.
//!
//! A thin async client over the two endpoints the application consumes:
//! account search and profile lookup. The base URL is configurable so
//! tests can point the client at a local stub server.

pub mod client;

pub use client::{GithubClient, GithubConfig};
