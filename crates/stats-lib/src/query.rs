//! Stats query operations
//!
//! Each operation opens its own connection, issues its calls one after the
//! other and writes one JSON file per result. The first failure is returned
//! as-is; files written before it stay on disk.

use crate::client::{ClientConfig, GrpcStatsApi, StatsApi};
use crate::error::Result;
use crate::output::{write_result, write_traffic, STATS_FILE, SYS_STATS_FILE, TRAFFIC_STATS_FILE};
use crate::pattern::TrafficTarget;
use crate::proto::Stat;
use std::path::Path;
use tracing::{debug, info};

/// Query system stats and all counters of `server`, writing `sysStats.json`
/// and `stats.json` into `output_dir`.
///
/// `server` is the API address of the proxy core, like `127.0.0.1:10085`.
pub async fn query_stats(server: &str, output_dir: impl AsRef<Path>) -> Result<()> {
    query_stats_with_config(server, output_dir, &ClientConfig::default()).await
}

/// [`query_stats`] with explicit transport options.
pub async fn query_stats_with_config(
    server: &str,
    output_dir: impl AsRef<Path>,
    config: &ClientConfig,
) -> Result<()> {
    let mut api = GrpcStatsApi::connect(server, config).await?;
    query_stats_with(&mut api, output_dir.as_ref()).await
}

/// [`query_stats`] against an already connected service.
pub async fn query_stats_with<A>(api: &mut A, output_dir: &Path) -> Result<()>
where
    A: StatsApi + ?Sized,
{
    let sys_stats = api.get_sys_stats().await?;
    write_result(Some(&sys_stats), &output_dir.join(SYS_STATS_FILE)).await?;

    let stats = api.query_stats("", false).await?;
    write_result(Some(&stats), &output_dir.join(STATS_FILE)).await?;

    info!(output_dir = %output_dir.display(), "Stats written");
    Ok(())
}

/// Query uplink and downlink traffic of one user, one inbound and one
/// outbound and write them to `trafficStats.json` in `output_dir`.
pub async fn query_traffic(
    server: &str,
    user_email: &str,
    inbound_tag: &str,
    outbound_tag: &str,
    output_dir: impl AsRef<Path>,
) -> Result<()> {
    let target = TrafficTarget::new(user_email, inbound_tag, outbound_tag);
    query_traffic_with_config(server, &target, output_dir, &ClientConfig::default())
        .await
        .map(|_| ())
}

/// [`query_traffic`] with explicit transport options. Returns the records
/// that were written.
pub async fn query_traffic_with_config(
    server: &str,
    target: &TrafficTarget,
    output_dir: impl AsRef<Path>,
    config: &ClientConfig,
) -> Result<Vec<Stat>> {
    let mut api = GrpcStatsApi::connect(server, config).await?;
    query_traffic_with(&mut api, target, output_dir.as_ref()).await
}

/// [`query_traffic`] against an already connected service.
pub async fn query_traffic_with<A>(
    api: &mut A,
    target: &TrafficTarget,
    output_dir: &Path,
) -> Result<Vec<Stat>>
where
    A: StatsApi + ?Sized,
{
    let combined = collect_traffic(api, target).await?;
    write_traffic(&combined, &output_dir.join(TRAFFIC_STATS_FILE)).await?;

    info!(
        output_dir = %output_dir.display(),
        records = combined.len(),
        "Traffic stats written"
    );
    Ok(combined)
}

/// Issue the six traffic queries in order and concatenate their counters.
pub async fn collect_traffic<A>(api: &mut A, target: &TrafficTarget) -> Result<Vec<Stat>>
where
    A: StatsApi + ?Sized,
{
    let mut combined = Vec::new();
    for pattern in target.patterns() {
        let response = api.query_stats(&pattern, false).await?;
        debug!(pattern = %pattern, count = response.stat.len(), "Traffic counters received");
        combined.extend(response.stat);
    }
    Ok(combined)
}
