use anyhow::{Context, Result};
use clap::Parser;

/// Camtrap Bench - GraphQL image query latency benchmark
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Target GraphQL endpoint URL
    #[arg(
        short = 'u',
        long,
        env = "API_URL",
        default_value = "http://localhost:3000/dev/external"
    )]
    pub url: String,

    /// Bearer token for the Authorization header
    #[arg(short = 't', long, env = "API_TOKEN")]
    pub token: Option<String>,

    /// Project passed in the x-selected-project header
    #[arg(
        short = 'p',
        long,
        env = "SELECTED_PROJECT",
        default_value = "henrysproject"
    )]
    pub project: String,

    /// Number of requests to issue
    #[arg(short = 'n', long, env = "NUM_REQUESTS", default_value = "1000")]
    pub requests: usize,

    /// Page limit sent in the query variables
    #[arg(short = 'l', long, env = "PAGE_LIMIT", default_value = "50")]
    pub limit: usize,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_REQUEST_TIMEOUT", default_value = "60")]
    pub timeout: u64,

    /// Seed for the label sampler (omit for a random run)
    #[arg(long, env = "BENCH_SEED")]
    pub seed: Option<u64>,

    /// Print the final report as JSON in addition to the summary
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Target endpoint
    pub url: String,

    /// Bearer credential, sourced from CLI or environment only
    pub api_token: String,

    /// Project selection header value
    pub project: String,

    // Run shape
    pub num_requests: usize,
    pub page_limit: usize,
    pub seed: Option<u64>,
    pub json_report: bool,

    // HTTP client
    pub http_request_timeout: u64,

    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with priority: CLI > ENV > defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let args = CliArgs::parse();
        Self::from_args(args)
    }

    /// Build a config from parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Config {
            url: args.url,

            // The token must come from outside the source tree
            api_token: args
                .token
                .or_else(|| std::env::var("API_TOKEN").ok())
                .context("API_TOKEN is required (use -t or set API_TOKEN env var)")?,

            project: args.project,
            num_requests: args.requests,
            page_limit: args.limit,
            seed: args.seed,
            json_report: args.json,
            http_request_timeout: args.timeout,
            log_level: args.log_level,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("API_URL must not be empty");
        }
        if self.page_limit == 0 {
            anyhow::bail!("PAGE_LIMIT must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_args() -> CliArgs {
        CliArgs {
            url: "http://localhost:3000/dev/external".to_string(),
            token: Some("test-token".to_string()),
            project: "henrysproject".to_string(),
            requests: 1000,
            limit: 50,
            timeout: 60,
            seed: None,
            json: false,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_from_args_with_token() {
        let config = Config::from_args(test_args()).unwrap();
        assert_eq!(config.api_token, "test-token");
        assert_eq!(config.num_requests, 1000);
        assert_eq!(config.page_limit, 50);
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let mut config = Config::from_args(test_args()).unwrap();
        config.url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::from_args(test_args()).unwrap();
        config.page_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = Config::from_args(test_args()).unwrap();
        assert!(config.validate().is_ok());
    }
}
