//! CLI argument definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "octoscout",
    about = "Search GitHub accounts and preview profiles in the terminal",
    after_help = "\
EXAMPLES:
    octoscout                        Start with the default query
    octoscout tokio                  Start with an initial query
    octoscout --countdown 10         Keep profiles visible for 10 seconds
    GITHUB_TOKEN=... octoscout       Authenticated requests (higher rate limit)"
)]
pub struct Args {
    /// Initial search phrase, queried once on startup
    #[arg(value_name = "QUERY", default_value = "rust")]
    pub query: String,

    /// Seconds a selected profile stays visible before it auto-clears
    #[arg(long, value_name = "SECS", default_value = "3")]
    pub countdown: u64,

    /// Base URL of the GitHub API
    #[arg(long, value_name = "URL", default_value = "https://api.github.com")]
    pub api_base: String,

    /// Bearer token for authenticated requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS", default_value = "10")]
    pub timeout: u64,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_interactive_case() {
        let args = Args::parse_from(["octoscout"]);
        assert_eq!(args.query, "rust");
        assert_eq!(args.countdown, 3);
        assert_eq!(args.api_base, "https://api.github.com");
        assert_eq!(args.timeout, 10);
        assert!(!args.quiet);
    }

    #[test]
    fn query_and_countdown_are_overridable() {
        let args = Args::parse_from(["octoscout", "tokio", "--countdown", "10"]);
        assert_eq!(args.query, "tokio");
        assert_eq!(args.countdown, 10);
    }
}
