use gax::grpc::Status;

pub mod autogen;
pub mod blocking;
pub mod longrunning;
mod metadata;
mod state;

pub use crate::metadata::Metadata;
pub use crate::state::OperationState;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    /// The server returned an operation descriptor that can not be tracked.
    #[error("malformed operation descriptor: {0}")]
    MalformedDescriptor(String),

    #[error(transparent)]
    GRPC(#[from] Status),

    #[error("deadline exceeded while waiting for the operation")]
    DeadlineExceeded,

    /// The operation finished with an error. The payload is the status reported by the server.
    #[error("operation failed: {0:?}")]
    RemoteJob(googleapis::rpc::Status),

    #[error("failed to decode operation payload: {0}")]
    Decode(#[from] prost::DecodeError),
}
