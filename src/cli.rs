// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// All flags are optional. Without --url the program asks for one on stdin.
// =============================================================================

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

use scarlet::config::{CrawlConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};
use scarlet::CrawlError;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "scarlet",
    version,
    about = "Web crawler that discovers every URL reachable within a site's domain",
    long_about = "scarlet starts from a seed URL, follows every link that stays on the same \
                  domain (subdomains included) and lists all the URLs it found. \
                  Results can be saved as JSON."
)]
pub struct Cli {
    /// Seed URL to crawl (prompted interactively when omitted)
    ///
    /// Must include http:// or https://
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Stop after roughly this many pages have been processed
    #[arg(short = 'm', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_urls: Option<u64>,

    /// Number of concurrent workers
    #[arg(short = 'w', long, default_value_t = DEFAULT_WORKERS as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub workers: u64,

    /// Write the list of URLs found to this JSON file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Don't verify TLS certificates (testing only)
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Per-request timeout in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Show debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Builds the crawl configuration around an already chosen seed.
    pub fn to_config(&self, seed: &str) -> Result<CrawlConfig, CrawlError> {
        Ok(CrawlConfig::new(seed)?
            .with_max_urls(self.max_urls.map(|m| m as usize))
            .with_workers(self.workers as usize)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_verify_tls(!self.insecure)
            .with_output(self.output.clone()))
    }
}
