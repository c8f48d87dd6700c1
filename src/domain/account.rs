//! Account types mirroring the two GitHub payloads we consume.
//!
//! The search endpoint only yields a login per account; the profile
//! endpoint yields the numeric id and the avatar URL. Both types are
//! ephemeral view state: summaries live as long as the result list for the
//! current phrase, profiles as long as the selection that fetched them.

use serde::Deserialize;

/// One entry of a search result, as returned by `/search/users`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountSummary {
    /// Unique display identifier of the account.
    pub login: String,
}

/// An account profile, as returned by `/users/{login}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountProfile {
    pub id: u64,
    pub avatar_url: String,
}
