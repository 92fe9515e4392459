//! Connection to the stats service
//!
//! A channel is opened per operation and dropped when the operation returns.
//! The transport is plaintext unless [`ClientConfig::tls`] is set.

use crate::error::{Result, StatsError};
use crate::proto::{
    QueryStatsRequest, QueryStatsResponse, StatsServiceClient, SysStatsRequest, SysStatsResponse,
};
use async_trait::async_trait;
use std::time::Duration;
use tonic::transport::{Channel, ClientTlsConfig};
use tracing::debug;

/// Transport options for reaching the stats service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Use TLS with the host part of the server address as domain name
    pub tls: bool,
    /// Connection establishment timeout; `None` waits until the attempt fails
    pub connect_timeout: Option<Duration>,
    /// Per-call deadline; `None` lets a call block as long as the server does
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Insecure transport with no deadlines.
    pub fn insecure() -> Self {
        Self::default()
    }

    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    fn scheme(&self) -> &'static str {
        if self.tls {
            "https"
        } else {
            "http"
        }
    }

    /// Turn a `host:port` address into an endpoint URI and its host name.
    ///
    /// Addresses that already carry a scheme are used as given.
    pub fn endpoint(&self, server: &str) -> Result<(String, String)> {
        let invalid = |reason: String| StatsError::InvalidAddress {
            address: server.to_string(),
            reason,
        };

        if server.trim().is_empty() {
            return Err(invalid("address is empty".to_string()));
        }

        let uri = if server.contains("://") {
            server.to_string()
        } else {
            format!("{}://{}", self.scheme(), server)
        };

        let url = url::Url::parse(&uri).map_err(|e| invalid(e.to_string()))?;
        let host = url
            .host_str()
            .map(|h| h.trim_start_matches('[').trim_end_matches(']').to_string())
            .ok_or_else(|| invalid("no host in address".to_string()))?;

        Ok((uri, host))
    }
}

/// Open a channel to `server`, waiting until it is connected or fails.
pub async fn connect(server: &str, config: &ClientConfig) -> Result<Channel> {
    let (uri, host) = config.endpoint(server)?;

    let mut endpoint =
        Channel::from_shared(uri.clone()).map_err(|e| StatsError::InvalidAddress {
            address: server.to_string(),
            reason: e.to_string(),
        })?;

    if config.tls {
        endpoint = endpoint.tls_config(ClientTlsConfig::new().domain_name(host))?;
    }
    if let Some(timeout) = config.connect_timeout {
        endpoint = endpoint.connect_timeout(timeout);
    }
    if let Some(timeout) = config.request_timeout {
        endpoint = endpoint.timeout(timeout);
    }

    let channel = endpoint.connect().await?;
    debug!(endpoint = %uri, tls = config.tls, "Connected to stats service");

    Ok(channel)
}

/// Remote operations the query functions depend on
#[async_trait]
pub trait StatsApi: Send {
    /// Fetch process-level counters of the proxy core
    async fn get_sys_stats(&mut self) -> Result<SysStatsResponse>;

    /// Fetch all counters whose name matches `pattern`
    async fn query_stats(&mut self, pattern: &str, reset: bool) -> Result<QueryStatsResponse>;
}

/// [`StatsApi`] over a gRPC channel
#[derive(Debug, Clone)]
pub struct GrpcStatsApi {
    client: StatsServiceClient<Channel>,
}

impl GrpcStatsApi {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: StatsServiceClient::new(channel),
        }
    }

    /// Connect to `server` and wrap the channel.
    pub async fn connect(server: &str, config: &ClientConfig) -> Result<Self> {
        let channel = connect(server, config).await?;
        Ok(Self::new(channel))
    }
}

#[async_trait]
impl StatsApi for GrpcStatsApi {
    async fn get_sys_stats(&mut self) -> Result<SysStatsResponse> {
        debug!("GetSysStats");
        let response = self
            .client
            .get_sys_stats(tonic::Request::new(SysStatsRequest {}))
            .await?;
        Ok(response.into_inner())
    }

    async fn query_stats(&mut self, pattern: &str, reset: bool) -> Result<QueryStatsResponse> {
        debug!(pattern = %pattern, reset, "QueryStats");
        let response = self
            .client
            .query_stats(tonic::Request::new(QueryStatsRequest {
                pattern: pattern.to_string(),
                reset,
            }))
            .await?;
        Ok(response.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_insecure_without_deadlines() {
        let config = ClientConfig::default();
        assert!(!config.tls);
        assert_eq!(config.connect_timeout, None);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config, ClientConfig::insecure());
    }

    #[test]
    fn test_endpoint_from_host_port() {
        let (uri, host) = ClientConfig::default().endpoint("127.0.0.1:10085").unwrap();
        assert_eq!(uri, "http://127.0.0.1:10085");
        assert_eq!(host, "127.0.0.1");
    }

    #[test]
    fn test_endpoint_with_tls_uses_https() {
        let config = ClientConfig::default().with_tls(true);
        let (uri, host) = config.endpoint("stats.example.com:443").unwrap();
        assert_eq!(uri, "https://stats.example.com:443");
        assert_eq!(host, "stats.example.com");
    }

    #[test]
    fn test_endpoint_keeps_explicit_scheme() {
        let (uri, _) = ClientConfig::default()
            .endpoint("http://localhost:8080")
            .unwrap();
        assert_eq!(uri, "http://localhost:8080");
    }

    #[test]
    fn test_endpoint_ipv6_host() {
        let (_, host) = ClientConfig::default().endpoint("[::1]:10085").unwrap();
        assert_eq!(host, "::1");
    }

    #[test]
    fn test_empty_address_is_rejected() {
        let err = ClientConfig::default().endpoint("").unwrap_err();
        assert!(matches!(err, StatsError::InvalidAddress { .. }));
    }

    #[test]
    fn test_builder_sets_timeouts() {
        let config = ClientConfig::insecure()
            .with_connect_timeout(Duration::from_secs(5))
            .with_request_timeout(Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }
}
