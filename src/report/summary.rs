// src/report/summary.rs
// Final statistics block printed after the crawl.

use colored::Colorize;
use std::time::Duration;

use crate::crawl::StatsSnapshot;

const RULE_WIDTH: usize = 60;

/// Prints the framed, colored summary block to stdout.
pub fn print_statistics(stats: &StatsSnapshot) {
    let rule = "=".repeat(RULE_WIDTH);

    println!();
    println!("{}", rule.cyan());
    println!("{}", "FINAL STATISTICS".cyan());
    println!("{}", rule.cyan());
    println!("{} {}", "URLs found:".green(), stats.found);
    println!("{} {}", "URLs processed:".yellow(), stats.processed);
    println!("{} {}", "Errors:".red(), stats.errors);
    println!("{} {}", "Total time:".magenta(), format_elapsed(stats.elapsed));
    println!("{}", rule.cyan());
    println!();
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}
