use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://oevortex-webscout.hf.space/api/news";

const LOG_FILENAME: &str = "newsdesk.log";

/// Terminal news search.
///
/// Type a query, press Enter, browse the results and open them in a browser.
#[derive(Parser, Debug)]
#[command(name = "newsdesk", version, about)]
pub struct Cli {
    /// Initial search query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// News search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Maximum number of results requested
    #[arg(long, default_value_t = 10)]
    pub max_results: u32,

    /// Recency window (d = past day, w = week, m = month)
    #[arg(long, default_value = "d")]
    pub timelimit: String,

    /// Region code (wt-wt = no region filter)
    #[arg(long, default_value = "wt-wt")]
    pub region: String,

    /// Safe search level
    #[arg(long, default_value = "moderate")]
    pub safesearch: String,

    /// Request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Run one search for --query, print the results and exit
    #[arg(long)]
    pub print: bool,

    /// With --print, write results as JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Log file for the interactive screen (default: platform data dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub max_results: u32,
    pub timelimit: String,
    pub region: String,
    pub safesearch: String,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_results: 10,
            timelimit: "d".to_string(),
            region: "wt-wt".to_string(),
            safesearch: "moderate".to_string(),
        }
    }
}

impl SearchParams {
    pub fn to_query(&self, q: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", q.to_string()),
            ("max_results", self.max_results.to_string()),
            ("timelimit", self.timelimit.clone()),
            ("region", self.region.clone()),
            ("safesearch", self.safesearch.clone()),
        ]
    }
}

#[derive(Clone, Debug)]
pub enum Output {
    Interactive,
    Human,
    Json,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: Url,
    pub params: SearchParams,
    pub timeout: Option<Duration>,
    pub initial_query: String,
    pub output: Output,
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let endpoint = Url::parse(&cli.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", cli.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!("Endpoint must be http or https: {}", endpoint);
        }
        if cli.max_results == 0 {
            bail!("--max-results must be at least 1");
        }

        let output = match (cli.print, cli.json) {
            (false, _) => Output::Interactive,
            (true, false) => Output::Human,
            (true, true) => Output::Json,
        };

        Ok(Self {
            endpoint,
            params: SearchParams {
                max_results: cli.max_results,
                timelimit: cli.timelimit,
                region: cli.region,
                safesearch: cli.safesearch,
            },
            timeout: cli.timeout_secs.map(Duration::from_secs),
            initial_query: cli.query,
            output,
            log_file: cli.log_file,
            verbose: cli.verbose,
        })
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        ProjectDirs::from("dev", "newsdesk", "newsdesk")
            .map(|dirs| dirs.data_local_dir().join(LOG_FILENAME))
            .ok_or_else(|| anyhow!("Could not determine data directory"))
    }
}
