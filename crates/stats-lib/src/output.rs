//! JSON artifacts written to the output directory

use crate::error::{Result, StatsError};
use crate::proto::Stat;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// System stats of the proxy core
pub const SYS_STATS_FILE: &str = "sysStats.json";
/// All counters known to the stats service
pub const STATS_FILE: &str = "stats.json";
/// Combined user, inbound and outbound traffic counters
pub const TRAFFIC_STATS_FILE: &str = "trafficStats.json";

/// One entry of `trafficStats.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficRecord<'a> {
    pub name: &'a str,
    pub value: i64,
}

impl<'a> From<&'a Stat> for TrafficRecord<'a> {
    fn from(stat: &'a Stat) -> Self {
        Self {
            name: &stat.name,
            value: stat.value,
        }
    }
}

/// Serialize `message` as compact JSON and write it to `path`.
///
/// An absent message fails with [`StatsError::NilValue`] and leaves `path`
/// untouched.
pub async fn write_result<T>(message: Option<&T>, path: &Path) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let message = message.ok_or(StatsError::NilValue)?;
    let bytes = serde_json::to_vec(message)?;
    write_bytes(&bytes, path).await
}

/// Write the combined traffic counters as a JSON array of `{name, value}`.
pub async fn write_traffic(stats: &[Stat], path: &Path) -> Result<()> {
    let records: Vec<TrafficRecord<'_>> = stats.iter().map(TrafficRecord::from).collect();
    write_result(Some(records.as_slice()), path).await
}

async fn write_bytes(bytes: &[u8], path: &Path) -> Result<()> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote stats result");
    Ok(())
}
