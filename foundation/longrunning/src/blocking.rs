//! Blocking counterpart of [`crate::longrunning::Operation`] for callers without an async runtime.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use gax::call_option::CallOptions;
use gax::grpc::Status;
use googleapis::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, Operation as InternalOperation,
};

use crate::autogen::operations_client::Operations as AsyncOperations;
use crate::longrunning::once;
use crate::state::{polling_backoff, OperationState, Tracked};
use crate::{Error, Metadata};

/// Operations is the blocking RPC invoker an operation handle talks to.
pub trait Operations: Send + Sync {
    fn get_operation(&self, req: GetOperationRequest, options: &CallOptions) -> Result<InternalOperation, Status>;

    fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status>;

    fn delete_operation(&self, req: DeleteOperationRequest, options: &CallOptions) -> Result<(), Status>;
}

/// BlockOn drives an async invoker on the given runtime.
/// It must not be used from within an async context.
pub struct BlockOn {
    inner: Arc<dyn AsyncOperations>,
    runtime: Arc<Runtime>,
}

impl BlockOn {
    pub fn new(inner: Arc<dyn AsyncOperations>, runtime: Arc<Runtime>) -> Self {
        Self { inner, runtime }
    }
}

impl Operations for BlockOn {
    fn get_operation(&self, req: GetOperationRequest, options: &CallOptions) -> Result<InternalOperation, Status> {
        self.runtime.block_on(self.inner.get_operation(req, options))
    }

    fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status> {
        self.runtime.block_on(self.inner.cancel_operation(req, options))
    }

    fn delete_operation(&self, req: DeleteOperationRequest, options: &CallOptions) -> Result<(), Status> {
        self.runtime.block_on(self.inner.delete_operation(req, options))
    }
}

/// Operation tracks a long-running operation, suspending the calling thread on every RPC.
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
    pub fn new(raw: InternalOperation, client: Arc<dyn Operations>, options: CallOptions) -> Result<Self, Error> {
        Ok(Self {
            tracked: Tracked::new(raw)?,
            client,
            options,
        })
    }

    pub fn name(&self) -> &str {
        self.tracked.name()
    }

    pub fn done(&self) -> bool {
        self.tracked.done()
    }

    pub fn state(&self) -> OperationState {
        self.tracked.state()
    }

    pub fn metadata(&self) -> Option<&M> {
        self.tracked.metadata()
    }

    pub fn raw(&self) -> &InternalOperation {
        self.tracked.raw()
    }

    /// Poll fetches the latest state of the operation, see [`crate::longrunning::Operation::poll`].
    pub fn poll(&mut self) -> Result<Option<T>, Error> {
        if !self.done() {
            let latest = self.client.get_operation(self.get_request(), &self.options)?;
            self.tracked.update(latest)?;
        }
        self.tracked.result().transpose()
    }

    /// Wait blocks until the operation is done and returns its result.
    ///
    /// With a `timeout`, each GetOperation runs on a worker thread so that the caller is released
    /// when it elapses, even if the RPC has not returned yet. A late response is discarded.
    /// Without one, polls run on the calling thread.
    pub fn wait(&mut self, timeout: Option<Duration>) -> Result<T, Error> {
        if let Some(result) = self.tracked.result() {
            return result;
        }
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut backoff = polling_backoff();
        loop {
            let latest = self.fetch_before(deadline)?;
            self.tracked.update(latest)?;
            if let Some(result) = self.tracked.result() {
                return result;
            }
            let delay = backoff.next().unwrap_or(Duration::from_secs(10));
            if let Some(deadline) = deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining <= delay {
                    thread::sleep(remaining);
                    return Err(Error::DeadlineExceeded);
                }
            }
            tracing::trace!("operation {} is running, next poll after {:?}", self.name(), delay);
            thread::sleep(delay);
        }
    }

    /// Cancel requests the server to cancel the operation, see [`crate::longrunning::Operation::cancel`].
    pub fn cancel(&self) -> Result<(), Error> {
        let req = CancelOperationRequest {
            name: self.name().to_string(),
        };
        Ok(self.client.cancel_operation(req, &once(&self.options))?)
    }

    /// Delete tells the server the result is no longer needed. It does not cancel the operation.
    pub fn delete(&self) -> Result<(), Error> {
        let req = DeleteOperationRequest {
            name: self.name().to_string(),
        };
        Ok(self.client.delete_operation(req, &self.options)?)
    }

    fn get_request(&self) -> GetOperationRequest {
        GetOperationRequest {
            name: self.name().to_string(),
        }
    }

    fn fetch_before(&self, deadline: Option<Instant>) -> Result<InternalOperation, Error> {
        let deadline = match deadline {
            Some(deadline) => deadline,
            None => return Ok(self.client.get_operation(self.get_request(), &self.options)?),
        };
        let client = Arc::clone(&self.client);
        let req = self.get_request();
        let options = self.options.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // the receiver is gone when the caller already timed out
            let _ = tx.send(client.get_operation(req, &options));
        });
        match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(result) => Ok(result?),
            Err(RecvTimeoutError::Timeout) => Err(Error::DeadlineExceeded),
            Err(RecvTimeoutError::Disconnected) => Err(Status::aborted("operation poller exited without response").into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::{Duration, Instant};

    use gax::call_option::CallOptions;
    use gax::grpc::{Code, Status};
    use googleapis::longrunning::{CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, Operation};

    use crate::blocking::{BlockOn, Operation as Handle, Operations};
    use crate::longrunning::tests::ScriptedOperations;
    use crate::state::testutil::{failed, pending, succeeded};
    use crate::state::OperationState;
    use crate::Error;

    #[derive(Default)]
    struct Scripted {
        responses: Mutex<VecDeque<Result<Operation, Status>>>,
        calls: Mutex<Vec<String>>,
        delay: Option<Duration>,
    }

    impl Scripted {
        fn new(responses: Vec<Result<Operation, Status>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
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

    impl Operations for Scripted {
        fn get_operation(&self, req: GetOperationRequest, _options: &CallOptions) -> Result<Operation, Status> {
            if let Some(delay) = self.delay {
                thread::sleep(delay);
            }
            self.next(format!("get:{}", req.name))
        }

        fn cancel_operation(&self, req: CancelOperationRequest, options: &CallOptions) -> Result<(), Status> {
            assert_eq!(options.retry.as_ref().map(|r| r.take), Some(0));
            self.next(format!("cancel:{}", req.name)).map(|_| ())
        }

        fn delete_operation(&self, req: DeleteOperationRequest, _options: &CallOptions) -> Result<(), Status> {
            self.next(format!("delete:{}", req.name)).map(|_| ())
        }
    }

    type Job = Handle<prost_types::Timestamp, prost_types::Duration>;

    fn job(raw: Operation, client: &Arc<Scripted>) -> Job {
        Handle::new(raw, client.clone(), CallOptions::default()).unwrap()
    }

    #[test]
    fn test_poll_is_monotonic() {
        let client = Arc::new(Scripted::new(vec![
            Ok(succeeded("operations/1", 5)),
            Ok(pending("operations/1", 10)),
        ]));
        let mut op = job(pending("operations/1", 10), &client);
        assert_eq!(op.poll().unwrap().unwrap().seconds, 5);
        assert!(op.done());
        assert_eq!(op.poll().unwrap().unwrap().seconds, 5);
        assert!(op.done());
        assert_eq!(client.calls().len(), 1);
    }

    #[test]
    fn test_wait_on_done_operation_does_not_poll() {
        let client = Arc::new(Scripted::default());
        let mut op = job(succeeded("operations/1", 5), &client);
        assert_eq!(op.wait(None).unwrap().seconds, 5);
        assert!(client.calls().is_empty());
    }

    #[test]
    fn test_wait_until_done() {
        let client = Arc::new(Scripted::new(vec![
            Ok(pending("operations/1", 20)),
            Ok(succeeded("operations/1", 8)),
        ]));
        let mut op = job(pending("operations/1", 10), &client);
        assert_eq!(op.wait(Some(Duration::from_secs(30))).unwrap().seconds, 8);
        assert_eq!(client.calls().len(), 2);
    }

    #[test]
    fn test_wait_remote_failure() {
        let client = Arc::new(Scripted::new(vec![Ok(failed("operations/1", 1, "cancelled"))]));
        let mut op = job(pending("operations/1", 10), &client);
        match op.wait(None).unwrap_err() {
            Error::RemoteJob(status) => assert_eq!(status.code, 1),
            e => panic!("unexpected error {e:?}"),
        }
        assert_eq!(op.state(), OperationState::Cancelled);
    }

    #[test]
    fn test_wait_releases_caller_at_deadline() {
        let client = Arc::new(Scripted {
            responses: Mutex::new(vec![Ok(succeeded("operations/1", 1))].into()),
            delay: Some(Duration::from_secs(5)),
            ..Default::default()
        });
        let mut op = job(pending("operations/1", 10), &client);
        let started = Instant::now();
        let err = op.wait(Some(Duration::from_millis(100))).unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded));
        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(!op.done());
    }

    #[test]
    fn test_wait_deadline_between_polls() {
        let responses = (0..100).map(|_| Ok(pending("operations/1", 10))).collect();
        let client = Arc::new(Scripted::new(responses));
        let mut op = job(pending("operations/1", 10), &client);
        let err = op.wait(Some(Duration::from_millis(250))).unwrap_err();
        assert!(matches!(err, Error::DeadlineExceeded));
        assert!(!client.calls().is_empty());
    }

    #[test]
    fn test_poll_transport_error() {
        let client = Arc::new(Scripted::new(vec![Err(Status::unavailable("unavailable"))]));
        let mut op = job(pending("operations/1", 10), &client);
        match op.poll().unwrap_err() {
            Error::GRPC(status) => assert_eq!(status.code(), Code::Unavailable),
            e => panic!("unexpected error {e:?}"),
        }
        assert!(!op.done());
    }

    #[test]
    fn test_wait_without_timeout_polls_on_caller_thread() {
        struct CallerThread {
            caller: thread::ThreadId,
        }

        impl Operations for CallerThread {
            fn get_operation(&self, _req: GetOperationRequest, _options: &CallOptions) -> Result<Operation, Status> {
                assert_eq!(thread::current().id(), self.caller);
                Ok(succeeded("operations/1", 6))
            }

            fn cancel_operation(&self, _req: CancelOperationRequest, _options: &CallOptions) -> Result<(), Status> {
                Ok(())
            }

            fn delete_operation(&self, _req: DeleteOperationRequest, _options: &CallOptions) -> Result<(), Status> {
                Ok(())
            }
        }

        let client = Arc::new(CallerThread {
            caller: thread::current().id(),
        });
        let mut op = Job::new(pending("operations/1", 10), client, CallOptions::default())
            .ok()
            .unwrap();
        assert_eq!(op.wait(None).unwrap().seconds, 6);
    }

    #[test]
    fn test_cancel_racing_completion() {
        // the server may report either outcome after a cancel request
        for last in [succeeded("operations/1", 1), failed("operations/1", 1, "cancelled")] {
            let client = Arc::new(Scripted::new(vec![Ok(Operation::default()), Ok(last)]));
            let mut op = job(pending("operations/1", 10), &client);
            op.cancel().unwrap();
            let _ = op.wait(Some(Duration::from_secs(5)));
            assert!(op.done());
            assert!(matches!(op.state(), OperationState::Succeeded | OperationState::Cancelled));
            assert_eq!(client.calls(), vec!["cancel:operations/1", "get:operations/1"]);
        }
    }

    #[test]
    fn test_cancel_and_delete() {
        let client = Arc::new(Scripted::new(vec![Ok(Operation::default()), Ok(Operation::default())]));
        let op = job(pending("operations/1", 10), &client);
        op.cancel().unwrap();
        op.delete().unwrap();
        assert_eq!(client.calls(), vec!["cancel:operations/1", "delete:operations/1"]);
    }

    #[test]
    fn test_block_on_async_invoker() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let inner = Arc::new(ScriptedOperations::new(vec![Ok(succeeded("operations/1", 4))]));
        let client = Arc::new(BlockOn::new(inner.clone(), Arc::new(runtime)));
        let mut op = Job::new(pending("operations/1", 10), client, CallOptions::default())
            .ok()
            .unwrap();
        assert_eq!(op.wait(None).unwrap().seconds, 4);
        assert_eq!(inner.calls(), vec!["get:operations/1"]);
    }
}
