use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use gax::call_option::CallOptions;
use gax::grpc::Status;
use gax::retry::RetrySetting;
use googleapis::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, Operation as InternalOperation,
};

use crate::autogen::operations_client::Operations;
use crate::state::{polling_backoff, OperationState, Tracked};
use crate::{Error, Metadata};

/// Operation tracks a long-running operation started by an RPC.
///
/// `T` is the type of the result and `M` the type of the metadata the server reports while
/// the operation runs. Use `()` for operations whose result is `google.protobuf.Empty`,
/// or as `M` to ignore the metadata.
pub struct Operation<T, M = ()>
where
    T: prost::Message + Default,
    M: Metadata,
{
    tracked: Tracked<T, M>,
    client: Arc<dyn Operations>,
    options: CallOptions,
}

impl<T, M> Operation<T, M>
where
    T: prost::Message + Default,
    M: Metadata,
{
    /// Wraps the descriptor returned by the RPC that started the operation.
    /// The call options are used for every GetOperation issued by `poll` and `wait`.
    pub fn new(raw: InternalOperation, client: Arc<dyn Operations>, options: CallOptions) -> Result<Self, Error> {
        Ok(Self {
            tracked: Tracked::new(raw)?,
            client,
            options,
        })
    }

    /// Name returns the name of the long-running operation.
    /// The name is assigned by the server and is unique within the service
    /// from which the operation is created.
    pub fn name(&self) -> &str {
        self.tracked.name()
    }

    /// Done reports whether the long-running operation has completed.
    pub fn done(&self) -> bool {
        self.tracked.done()
    }

    pub fn state(&self) -> OperationState {
        self.tracked.state()
    }

    /// Returns the metadata of the last descriptor that carried one.
    pub fn metadata(&self) -> Option<&M> {
        self.tracked.metadata()
    }

    /// Returns the latest descriptor as received from the server.
    pub fn raw(&self) -> &InternalOperation {
        self.tracked.raw()
    }

    /// Poll fetches the latest state of a long-running operation.
    ///
    /// If Poll fails, the error is returned and the operation is unmodified.
    /// If the operation has completed with failure, `Error::RemoteJob` is returned and done reports true.
    /// If the operation has completed successfully, the decoded result is returned.
    /// No RPC is issued once the operation is done.
    pub async fn poll(&mut self) -> Result<Option<T>, Error> {
        if !self.done() {
            let latest = self.client.get_operation(self.get_request(), &self.options).await?;
            self.tracked.update(latest)?;
        }
        self.tracked.result().transpose()
    }

    /// Wait polls the operation until it is done and returns its result.
    ///
    /// When the operation is already done the result is returned without any RPC.
    /// When `timeout` elapses first `Error::DeadlineExceeded` is returned, even if a GetOperation is in flight.
    /// The in-flight call keeps running in the background and its response is discarded.
    pub async fn wait(&mut self, timeout: Option<Duration>) -> Result<T, Error> {
        if let Some(result) = self.tracked.result() {
            return result;
        }
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut backoff = polling_backoff();
        loop {
            let latest = self.fetch_before(deadline).await?;
            self.tracked.update(latest)?;
            if let Some(result) = self.tracked.result() {
                return result;
            }
            let delay = backoff.next().unwrap_or(Duration::from_secs(10));
            if let Some(deadline) = deadline {
                if deadline.saturating_duration_since(Instant::now()) <= delay {
                    tokio::time::sleep_until(deadline).await;
                    return Err(Error::DeadlineExceeded);
                }
            }
            tracing::trace!("operation {} is running, next poll after {:?}", self.name(), delay);
            tokio::time::sleep(delay).await;
        }
    }

    /// Cancel starts asynchronous cancellation on a long-running operation. The server
    /// makes a best effort to cancel the operation, but success is not
    /// guaranteed. Use poll to check whether the cancellation succeeded or whether the
    /// operation completed despite cancellation. On successful cancellation,
    /// the operation is not deleted; instead, the state becomes `Cancelled`.
    /// The request is sent once and never retried.
    pub async fn cancel(&self) -> Result<(), Error> {
        let req = CancelOperationRequest {
            name: self.name().to_string(),
        };
        Ok(self.client.cancel_operation(req, &once(&self.options)).await?)
    }

    /// Delete deletes a long-running operation. This method indicates that the client is
    /// no longer interested in the operation result. It does not cancel the operation.
    pub async fn delete(&self) -> Result<(), Error> {
        let req = DeleteOperationRequest {
            name: self.name().to_string(),
        };
        Ok(self.client.delete_operation(req, &self.options).await?)
    }

    fn get_request(&self) -> GetOperationRequest {
        GetOperationRequest {
            name: self.name().to_string(),
        }
    }

    async fn fetch_before(&self, deadline: Option<Instant>) -> Result<InternalOperation, Error> {
        let deadline = match deadline {
            Some(deadline) => deadline,
            None => return Ok(self.client.get_operation(self.get_request(), &self.options).await?),
        };
        let client = Arc::clone(&self.client);
        let req = self.get_request();
        let options = self.options.clone();
        let task = tokio::spawn(async move { client.get_operation(req, &options).await });
        match tokio::time::timeout_at(deadline, task).await {
            Ok(Ok(result)) => Ok(result?),
            Ok(Err(e)) => Err(Status::aborted(format!("operation poller failed: {e}")).into()),
            Err(_) => Err(Error::DeadlineExceeded),
        }
    }
}

/// once returns the options with retries disabled.
pub(crate) fn once(options: &CallOptions) -> CallOptions {
    options.clone().with_retry(RetrySetting {
        take: 0,
        ..options.retry.clone().unwrap_or_default()
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use gax::call_option::CallOptions;
    use gax::grpc::{Code, Status};
    use googleapis::longrunning::{CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, Operation};

    use crate::autogen::operations_client::Operations;
    use crate::longrunning::Operation as Handle;
    use crate::state::testutil::{failed, pending, succeeded};
    use crate::state::OperationState;
    use crate::Error;

    #[derive(Default)]
    pub struct ScriptedOperations {
        responses: Mutex<VecDeque<Result<Operation, Status>>>,
        pub calls: Mutex<Vec<String>>,
        pub delay: Option<Duration>,
    }

    impl ScriptedOperations {
        pub fn new(responses: Vec<Result<Operation, Status>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn next(&self, call: String) -> Result<Operation, Status> {
            self.calls.lock().unwrap().push(call);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Status::internal("no scripted response")))
        }
    }

    #[async_trait]
    impl Operations for ScriptedOperations {
        async fn get_operation(&self, req: GetOperationRequest, _options: &CallOptions) -> Result<Operation, Status> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.next(format!("get:{}", req.name))
        }

        async fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status> {
            assert_eq!(options.retry.as_ref().map(|r| r.take), Some(0));
            self.next(format!("cancel:{}", req.name)).map(|_| ())
        }

        async fn delete_operation(&self, req: DeleteOperationRequest, _options: &CallOptions) -> Result<(), Status> {
            self.next(format!("delete:{}", req.name)).map(|_| ())
        }
    }

    type Job = Handle<prost_types::Timestamp, prost_types::Duration>;

    fn job(raw: Operation, client: &Arc<ScriptedOperations>) -> Job {
        Handle::new(raw, client.clone(), CallOptions::default()).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_descriptor() {
        let client = Arc::new(ScriptedOperations::default());
        let err = Job::new(Operation::default(), client.clone(), CallOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, Error::MalformedDescriptor(_)));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_poll_until_done() {
        let client = Arc::new(ScriptedOperations::new(vec![
            Ok(pending("operations/1", 30)),
            Ok(succeeded("operations/1", 42)),
        ]));
        let mut op = job(pending("operations/1", 10), &client);
        assert_eq!(op.metadata().unwrap().seconds, 10);

        assert!(op.poll().await.unwrap().is_none());
        assert!(!op.done());
        assert_eq!(op.metadata().unwrap().seconds, 30);

        let result = op.poll().await.unwrap().unwrap();
        assert_eq!(result.seconds, 42);
        assert!(op.done());
        assert_eq!(op.state(), OperationState::Succeeded);

        // done never reverts and no more RPC is issued
        let result = op.poll().await.unwrap().unwrap();
        assert_eq!(result.seconds, 42);
        assert!(op.done());
        assert_eq!(client.calls(), vec!["get:operations/1", "get:operations/1"]);
    }

    #[tokio::test]
    async fn test_immediate_polls_agree() {
        let client = Arc::new(ScriptedOperations::new(vec![
            Ok(pending("operations/1", 10)),
            Ok(pending("operations/1", 10)),
        ]));
        let mut op = job(pending("operations/1", 10), &client);
        assert!(op.poll().await.unwrap().is_none());
        let first = (op.name().to_string(), op.done(), op.metadata().cloned());
        assert!(op.poll().await.unwrap().is_none());
        let second = (op.name().to_string(), op.done(), op.metadata().cloned());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_poll_transport_error_leaves_handle_unmodified() {
        let client = Arc::new(ScriptedOperations::new(vec![Err(Status::unavailable("connection reset"))]));
        let mut op = job(pending("operations/1", 10), &client);
        match op.poll().await.unwrap_err() {
            Error::GRPC(status) => {
                assert_eq!(status.code(), Code::Unavailable);
                assert_eq!(status.message(), "connection reset");
            }
            e => panic!("unexpected error {e:?}"),
        }
        assert!(!op.done());
        assert_eq!(op.metadata().unwrap().seconds, 10);
    }

    #[tokio::test]
    async fn test_wait_on_done_operation_does_not_poll() {
        let client = Arc::new(ScriptedOperations::default());
        let mut op = job(succeeded("operations/1", 7), &client);
        assert_eq!(op.wait(Some(Duration::from_millis(1))).await.unwrap().seconds, 7);
        assert!(client.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_until_done() {
        let client = Arc::new(ScriptedOperations::new(vec![
            Ok(pending("operations/1", 20)),
            Ok(pending("operations/1", 50)),
            Ok(succeeded("operations/1", 3)),
        ]));
        let mut op = job(pending("operations/1", 10), &client);
        let result = op.wait(None).await.unwrap();
        assert_eq!(result.seconds, 3);
        assert_eq!(client.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_remote_failure() {
        let client = Arc::new(ScriptedOperations::new(vec![Ok(failed(
            "operations/1",
            6,
            "database already exists",
        ))]));
        let mut op = job(pending("operations/1", 10), &client);
        match op.wait(Some(Duration::from_secs(60))).await.unwrap_err() {
            Error::RemoteJob(status) => {
                assert_eq!(status.code, 6);
                assert_eq!(status.message, "database already exists");
            }
            e => panic!("unexpected error {e:?}"),
        }
        assert_eq!(op.state(), OperationState::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_deadline_exceeded() {
        let responses = (0..1000).map(|_| Ok(pending("operations/1", 10))).collect();
        let client = Arc::new(ScriptedOperations::new(responses));
        let mut op = job(pending("operations/1", 10), &client);
        let err = op.wait(Some(Duration::from_secs(1))).await.unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded));
        assert!(!op.done());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_deadline_with_rpc_in_flight() {
        let client = Arc::new(ScriptedOperations {
            responses: Mutex::new(vec![Ok(succeeded("operations/1", 1))].into()),
            delay: Some(Duration::from_secs(30)),
            ..Default::default()
        });
        let mut op = job(pending("operations/1", 10), &client);
        let err = op.wait(Some(Duration::from_secs(1))).await.unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded));
        assert!(!op.done());
        assert!(client.calls().is_empty());

        // the in-flight call is left running and its late response is discarded
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(client.calls(), vec!["get:operations/1"]);
        assert!(!op.done());
    }

    #[tokio::test]
    async fn test_wait_with_undecodable_metadata() {
        let mut latest = succeeded("operations/1", 42);
        if let Some(metadata) = latest.metadata.as_mut() {
            metadata.value = vec![0xff, 0xff];
        }
        let client = Arc::new(ScriptedOperations::new(vec![Ok(latest)]));
        let mut op = job(pending("operations/1", 10), &client);
        assert_eq!(op.wait(None).await.unwrap().seconds, 42);
        assert!(op.done());
        assert_eq!(op.metadata().unwrap().seconds, 10);
    }

    #[tokio::test]
    async fn test_cancel_racing_completion() {
        // the server may report either outcome after a cancel request
        for last in [succeeded("operations/1", 1), failed("operations/1", 1, "cancelled")] {
            let client = Arc::new(ScriptedOperations::new(vec![Ok(Operation::default()), Ok(last)]));
            let mut op = job(pending("operations/1", 10), &client);
            op.cancel().await.unwrap();
            let _ = op.poll().await;
            assert!(op.done());
            assert!(matches!(op.state(), OperationState::Succeeded | OperationState::Cancelled));
            assert_eq!(client.calls(), vec!["cancel:operations/1", "get:operations/1"]);
        }
    }

    #[tokio::test]
    async fn test_cancel_error_is_returned() {
        let client = Arc::new(ScriptedOperations::new(vec![Err(Status::unimplemented("not supported"))]));
        let op = job(pending("operations/1", 10), &client);
        match op.cancel().await.unwrap_err() {
            Error::GRPC(status) => assert_eq!(status.code(), Code::Unimplemented),
            e => panic!("unexpected error {e:?}"),
        }
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let client = Arc::new(ScriptedOperations::new(vec![Ok(Operation::default())]));
        let op = job(pending("operations/1", 10), &client);
        op.delete().await.unwrap();
        assert_eq!(client.calls(), vec!["delete:operations/1"]);
        assert!(!op.done());
    }
}
