//! System stats and counter dump

use anyhow::{Context, Result};
use serde_json::json;
use stats_lib::{query_stats_with_config, ClientConfig, STATS_FILE, SYS_STATS_FILE};
use std::path::Path;

use crate::output::{print_success, OutputFormat};

/// Write `sysStats.json` and `stats.json` into `output_dir`
pub async fn write_stats(
    server: &str,
    output_dir: &Path,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<()> {
    query_stats_with_config(server, output_dir, config)
        .await
        .with_context(|| format!("Failed to query stats from {}", server))?;

    let files = [output_dir.join(SYS_STATS_FILE), output_dir.join(STATS_FILE)];

    match format {
        OutputFormat::Json => {
            let summary = json!({
                "server": server,
                "files": files.iter().map(|f| f.display().to_string()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            for file in &files {
                print_success(&format!("Wrote {}", file.display()));
            }
        }
    }

    Ok(())
}
