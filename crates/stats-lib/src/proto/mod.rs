//! Stats service contract
//!
//! Message types and the unary client for `xray.app.stats.command.StatsService`,
//! written out by hand so the crate builds without `protoc`. Only the methods
//! this client consumes are provided.
//!
//! Messages serialize with the proto JSON mapping: field names as declared in
//! the schema, zero values omitted, 64-bit integers rendered as strings.

mod json;

pub mod command {
    use super::json;
    use prost::Message;
    use serde::Serialize;

    #[derive(Clone, PartialEq, Message, Serialize)]
    pub struct Stat {
        #[prost(string, tag = "1")]
        #[serde(skip_serializing_if = "json::is_default")]
        pub name: String,
        #[prost(int64, tag = "2")]
        #[serde(
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub value: i64,
    }

    #[derive(Clone, PartialEq, Message, Serialize)]
    pub struct QueryStatsRequest {
        #[prost(string, tag = "1")]
        #[serde(skip_serializing_if = "json::is_default")]
        pub pattern: String,
        #[prost(bool, tag = "2")]
        #[serde(skip_serializing_if = "json::is_default")]
        pub reset: bool,
    }

    #[derive(Clone, PartialEq, Message, Serialize)]
    pub struct QueryStatsResponse {
        #[prost(message, repeated, tag = "1")]
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub stat: Vec<Stat>,
    }

    #[derive(Clone, PartialEq, Message, Serialize)]
    pub struct SysStatsRequest {}

    #[derive(Clone, PartialEq, Message, Serialize)]
    pub struct SysStatsResponse {
        #[prost(uint32, tag = "1")]
        #[serde(rename = "NumGoroutine", skip_serializing_if = "json::is_default")]
        pub num_goroutine: u32,
        #[prost(uint32, tag = "2")]
        #[serde(rename = "NumGC", skip_serializing_if = "json::is_default")]
        pub num_gc: u32,
        #[prost(uint64, tag = "3")]
        #[serde(
            rename = "Alloc",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub alloc: u64,
        #[prost(uint64, tag = "4")]
        #[serde(
            rename = "TotalAlloc",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub total_alloc: u64,
        #[prost(uint64, tag = "5")]
        #[serde(
            rename = "Sys",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub sys: u64,
        #[prost(uint64, tag = "6")]
        #[serde(
            rename = "Mallocs",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub mallocs: u64,
        #[prost(uint64, tag = "7")]
        #[serde(
            rename = "Frees",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub frees: u64,
        #[prost(uint64, tag = "8")]
        #[serde(
            rename = "LiveObjects",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub live_objects: u64,
        #[prost(uint64, tag = "9")]
        #[serde(
            rename = "PauseTotalNs",
            skip_serializing_if = "json::is_default",
            serialize_with = "json::as_string"
        )]
        pub pause_total_ns: u64,
        #[prost(uint32, tag = "10")]
        #[serde(rename = "Uptime", skip_serializing_if = "json::is_default")]
        pub uptime: u32,
    }

    pub mod stats_service_client {
        use super::*;
        use tonic::codegen::*;

        #[derive(Debug, Clone)]
        pub struct StatsServiceClient<T> {
            inner: tonic::client::Grpc<T>,
        }

        impl StatsServiceClient<tonic::transport::Channel> {
            pub fn new(channel: tonic::transport::Channel) -> Self {
                let inner = tonic::client::Grpc::new(channel);
                Self { inner }
            }
        }

        impl<T> StatsServiceClient<T>
        where
            T: tonic::client::GrpcService<tonic::body::BoxBody>,
            T::Error: Into<StdError>,
            T::ResponseBody: Body<Data = Bytes> + Send + 'static,
            <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        {
            async fn ready(&mut self) -> Result<(), tonic::Status> {
                self.inner.ready().await.map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })
            }

            pub async fn query_stats(
                &mut self,
                request: impl tonic::IntoRequest<QueryStatsRequest>,
            ) -> Result<tonic::Response<QueryStatsResponse>, tonic::Status> {
                self.ready().await?;
                let codec = tonic::codec::ProstCodec::default();
                let path = http::uri::PathAndQuery::from_static(
                    "/xray.app.stats.command.StatsService/QueryStats",
                );
                self.inner.unary(request.into_request(), path, codec).await
            }

            pub async fn get_sys_stats(
                &mut self,
                request: impl tonic::IntoRequest<SysStatsRequest>,
            ) -> Result<tonic::Response<SysStatsResponse>, tonic::Status> {
                self.ready().await?;
                let codec = tonic::codec::ProstCodec::default();
                let path = http::uri::PathAndQuery::from_static(
                    "/xray.app.stats.command.StatsService/GetSysStats",
                );
                self.inner.unary(request.into_request(), path, codec).await
            }
        }
    }
}

pub use command::stats_service_client::StatsServiceClient;
pub use command::*;
