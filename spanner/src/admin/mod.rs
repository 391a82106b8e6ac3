use std::env::var;
use std::time::Duration;

use gax::conn::{ConnectionOptions, Environment};
use gax::endpoint::EndpointOptions;
use gax::grpc::{Code, Status};
use gax::retry::RetrySetting;
use token_source::NopeTokenSourceProvider;

pub mod blocking;
pub mod client;
pub mod database;
pub mod pager;
pub mod path;

pub const SPANNER: &str = "spanner.googleapis.com";

pub const EMULATOR_HOST_ENV: &str = "SPANNER_EMULATOR_HOST";

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The call was made with an invalid combination of arguments. No RPC was sent.
    #[error("invalid arguments: {0}")]
    Usage(String),

    #[error(transparent)]
    GRPC(#[from] Status),

    #[error(transparent)]
    Operation(#[from] longrunning::Error),
}

#[derive(Debug)]
pub struct AdminClientConfig {
    /// Runtime project
    pub environment: Environment,
    pub endpoint: EndpointOptions,
    /// Number of gRPC channels shared by the clients.
    pub pool_size: usize,
    pub connection_options: ConnectionOptions,
}

impl Default for AdminClientConfig {
    fn default() -> Self {
        AdminClientConfig {
            environment: match var(EMULATOR_HOST_ENV).ok() {
                Some(v) => Environment::Emulator(v),
                None => Environment::GoogleCloud(Box::new(NopeTokenSourceProvider {})),
            },
            endpoint: EndpointOptions::default(),
            pool_size: 1,
            connection_options: ConnectionOptions::default(),
        }
    }
}

pub fn default_retry_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 50,
        max_delay: Some(Duration::from_secs(10)),
        factor: 1u64,
        take: 20,
        codes: vec![Code::Unavailable, Code::Unknown, Code::DeadlineExceeded],
    }
}
