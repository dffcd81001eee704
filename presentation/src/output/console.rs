//! Console output formatter for run results

use chain_domain::{ProcessSummary, RoundConfig};
use colored::Colorize;

/// Formats a processing run for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the run summary
    pub fn format(summary: &ProcessSummary, config: &RoundConfig) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Block Processor Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Network:".cyan().bold(), config));
        output.push_str(&format!(
            "{} {} candidates from height {}\n",
            "Input:".cyan().bold(),
            summary.candidates(),
            summary.start_height
        ));
        output.push_str(&format!(
            "{} {}  {} {}\n",
            "Accepted:".green().bold(),
            summary.accepted,
            "Rejected:".red().bold(),
            summary.rejected
        ));
        output.push_str(&format!(
            "\n{} {}\n",
            "Last Block Accepted Height =".blue().bold(),
            summary.final_height
        ));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(summary: &ProcessSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final height only
    pub fn format_height(summary: &ProcessSummary) -> String {
        summary.final_height.to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}", "=".repeat(60).cyan())
    }
}
