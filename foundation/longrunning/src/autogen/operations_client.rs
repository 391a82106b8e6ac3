use std::time::Duration;

use async_trait::async_trait;

use gax::call_option::CallOptions;
use gax::conn::Channel;
use gax::create_request;
use gax::grpc::{Code, Status};
use gax::retry::{invoke, RetrySetting};
use googleapis::longrunning::operations_client::OperationsClient as InternalOperationsClient;
use googleapis::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, ListOperationsRequest,
    ListOperationsResponse, Operation, WaitOperationRequest,
};

pub fn default_retry_setting() -> RetrySetting {
    RetrySetting {
        from_millis: 50,
        max_delay: Some(Duration::from_secs(10)),
        factor: 1u64,
        take: 20,
        codes: vec![Code::Unavailable, Code::Unknown],
    }
}

/// Operations is the RPC invoker an operation handle talks to.
/// Implementations are expected to apply the call options (retry, timeout, cancellation)
/// and to return transport errors unchanged.
#[async_trait]
pub trait Operations: Send + Sync {
    async fn get_operation(&self, req: GetOperationRequest, options: &CallOptions) -> Result<Operation, Status>;

    async fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status>;

    async fn delete_operation(&self, req: DeleteOperationRequest, options: &CallOptions) -> Result<(), Status>;
}

#[derive(Clone, Debug)]
pub struct OperationsClient {
    inner: InternalOperationsClient<Channel>,
}

impl OperationsClient {
    pub fn new(channel: Channel) -> Self {
        OperationsClient {
            inner: InternalOperationsClient::new(channel),
        }
    }

    /// ListOperations lists operations that match the specified filter in the request.
    pub async fn list_operations(
        &self,
        req: ListOperationsRequest,
        options: &CallOptions,
    ) -> Result<ListOperationsResponse, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), options);
            self.inner.clone().list_operations(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// GetOperation gets the latest state of a long-running operation.  Clients can use this
    /// method to poll the operation result at intervals as recommended by the API service.
    pub async fn get_operation(&self, req: GetOperationRequest, options: &CallOptions) -> Result<Operation, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), options);
            self.inner.clone().get_operation(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// DeleteOperation deletes a long-running operation. This method indicates that the client is
    /// no longer interested in the operation result. It does not cancel the
    /// operation. If the server doesn't support this method, it returns
    /// google.rpc.Code.UNIMPLEMENTED.
    pub async fn delete_operation(&self, req: DeleteOperationRequest, options: &CallOptions) -> Result<(), Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), options);
            self.inner.clone().delete_operation(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// CancelOperation starts asynchronous cancellation on a long-running operation.  The server
    /// makes a best effort to cancel the operation, but success is not
    /// guaranteed.  If the server doesn't support this method, it returns
    /// google.rpc.Code.UNIMPLEMENTED. On successful cancellation,
    /// the operation is not deleted; instead, it becomes an operation with
    /// an Operation.error value with a google.rpc.Status.code of 1,
    /// corresponding to Code.CANCELLED.
    pub async fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), options);
            self.inner.clone().cancel_operation(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// WaitOperation waits until the specified long-running operation is done or reaches at most
    /// a specified timeout, returning the latest state. It is on a best-effort basis: an
    /// immediate response is no guarantee that the operation is done.
    pub async fn wait_operation(&self, req: WaitOperationRequest, options: &CallOptions) -> Result<Operation, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), options);
            self.inner.clone().wait_operation(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }
}

#[async_trait]
impl Operations for OperationsClient {
    async fn get_operation(&self, req: GetOperationRequest, options: &CallOptions) -> Result<Operation, Status> {
        OperationsClient::get_operation(self, req, options).await
    }

    async fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status> {
        OperationsClient::cancel_operation(self, req, options).await
    }

    async fn delete_operation(&self, req: DeleteOperationRequest, options: &CallOptions) -> Result<(), Status> {
        OperationsClient::delete_operation(self, req, options).await
    }
}
