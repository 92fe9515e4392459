//! Traffic counter dump

use anyhow::{Context, Result};
use colored::Colorize;
use stats_lib::{
    query_traffic_with_config, ClientConfig, TrafficRecord, TrafficTarget, TRAFFIC_STATS_FILE,
};
use std::path::Path;
use tabled::Tabled;

use crate::output::{color_direction, format_bytes, print_success, print_warning, OutputFormat};

/// Row for traffic table
#[derive(Tabled)]
struct TrafficRow {
    #[tabled(rename = "Counter")]
    name: String,
    #[tabled(rename = "Bytes")]
    value: i64,
    #[tabled(rename = "Size")]
    size: String,
}

/// Write `trafficStats.json` into `output_dir` and print the counters
pub async fn write_traffic(
    server: &str,
    target: &TrafficTarget,
    output_dir: &Path,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<()> {
    let stats = query_traffic_with_config(server, target, output_dir, config)
        .await
        .with_context(|| format!("Failed to query traffic from {}", server))?;

    match format {
        OutputFormat::Json => {
            let records: Vec<TrafficRecord<'_>> = stats.iter().map(TrafficRecord::from).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Table => {
            print_success(&format!(
                "Wrote {}",
                output_dir.join(TRAFFIC_STATS_FILE).display()
            ));
            println!();

            if stats.is_empty() {
                print_warning("No traffic counters matched");
                return Ok(());
            }

            let rows: Vec<TrafficRow> = stats
                .iter()
                .map(|stat| TrafficRow {
                    name: color_direction(&stat.name),
                    value: stat.value,
                    size: format_bytes(stat.value),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} counters", stats.len().to_string().bold());
        }
    }

    Ok(())
}
