//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI summaries
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Format a byte counter as human-readable string
pub fn format_bytes(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let value = bytes as f64;
    let magnitude = value.abs();
    if magnitude >= GB {
        format!("{:.2}Gi", value / GB)
    } else if magnitude >= MB {
        format!("{:.2}Mi", value / MB)
    } else if magnitude >= KB {
        format!("{:.2}Ki", value / KB)
    } else {
        format!("{}B", bytes)
    }
}

/// Color a traffic counter name by its direction
pub fn color_direction(name: &str) -> String {
    if name.ends_with("uplink") {
        name.cyan().to_string()
    } else if name.ends_with("downlink") {
        name.magenta().to_string()
    } else {
        name.to_string()
    }
}
