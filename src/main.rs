// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Get a seed URL (from --url, or by asking on stdin)
// 3. Run the crawl and print the final statistics
// 4. Optionally save the JSON report
// 5. Exit with 0 (crawl completed, even with some failed pages) or 2 (error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::error;
use std::io::{self, BufRead, Write};

use cli::Cli;
use scarlet::config::{is_valid_seed, CrawlConfig};
use scarlet::report::{print_statistics, save_results};
use scarlet::{CrawlError, Crawler};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = scarlet::logger::init_logger(cli.log_level()) {
        eprintln!("Warning: could not initialize logger: {}", e);
    }

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let seed = match &cli.url {
        Some(url) => url.clone(),
        None => prompt_for_url()?,
    };

    let config = cli.to_config(&seed)?;
    print_header(&config);

    let outcome = Crawler::new(config.clone())
        .run()
        .await
        .context("crawl failed")?;

    print_statistics(&outcome.stats);

    if let Some(path) = &config.output {
        // A failed write is reported but doesn't change the exit status
        match save_results(&outcome.result, path) {
            Ok(()) => println!("{} {}", "Results saved to:".green(), path.display()),
            Err(e) => error!("{}", e),
        }
    }

    Ok(())
}

fn print_header(config: &CrawlConfig) {
    println!();
    println!("{}", format!("[*] Crawling: {}", config.seed).cyan());
    println!("{}", format!("[*] Concurrent workers: {}", config.workers).cyan());
    if let Some(max) = config.max_urls {
        println!("{}", format!("[*] URL limit: {}", max).cyan());
    }
    if !config.verify_tls {
        println!("{}", "[!] WARNING: TLS certificate verification disabled".yellow());
    }
    println!();
}

// Asks for a seed URL until a valid one is entered
//
// Returns an error if stdin is closed before a valid URL is given
fn prompt_for_url() -> Result<String, CrawlError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", "Enter the URL: ".green());
        io::stdout()
            .flush()
            .map_err(|e| CrawlError::Prompt(e.to_string()))?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(CrawlError::Prompt(e.to_string())),
            None => return Err(CrawlError::Prompt("stdin closed".to_string())),
        };
        let url = line.trim();

        if url.is_empty() {
            println!("{}\n", "[!] Error: a URL is required".red());
        } else if !is_valid_seed(url) {
            println!(
                "{}\n",
                "[!] Error: invalid URL. It must include http:// or https://".red()
            );
        } else {
            return Ok(url.to_string());
        }
    }
}
