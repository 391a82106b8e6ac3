use std::marker::PhantomData;
use std::time::Duration;

use gax::retry::ExponentialBackoff;
use googleapis::longrunning::{operation, Operation as InternalOperation};

use crate::metadata::Metadata;
use crate::Error;

/// Code reported in the error of an operation that was cancelled.
const CANCELLED: i32 = 1;

/// OperationState is the client-side view of where an operation is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationState {
    Pending,
    Succeeded,
    Failed,
    Cancelled,
}

impl OperationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OperationState::Pending)
    }
}

/// Delays between two GetOperation calls of `wait`.
pub(crate) fn polling_backoff() -> ExponentialBackoff {
    ExponentialBackoff::from_millis(2)
        .factor(50)
        .max_delay(Duration::from_secs(10))
}

/// Tracked holds the latest descriptor and decoded metadata shared by the async and the blocking handle.
#[derive(Debug, Clone)]
pub(crate) struct Tracked<T, M>
where
    T: prost::Message + Default,
    M: Metadata,
{
    raw: InternalOperation,
    metadata: Option<M>,
    _marker: PhantomData<T>,
}

impl<T, M> Tracked<T, M>
where
    T: prost::Message + Default,
    M: Metadata,
{
    pub fn new(raw: InternalOperation) -> Result<Self, Error> {
        if raw.name.is_empty() {
            return Err(Error::MalformedDescriptor("operation name is empty".to_string()));
        }
        if raw.done && raw.result.is_none() {
            return Err(Error::MalformedDescriptor(format!("{} is done without result", raw.name)));
        }
        let metadata = decode_metadata(&raw);
        Ok(Self {
            raw,
            metadata,
            _marker: PhantomData,
        })
    }

    pub fn name(&self) -> &str {
        &self.raw.name
    }

    pub fn done(&self) -> bool {
        self.raw.done
    }

    pub fn raw(&self) -> &InternalOperation {
        &self.raw
    }

    pub fn metadata(&self) -> Option<&M> {
        self.metadata.as_ref()
    }

    pub fn state(&self) -> OperationState {
        if !self.raw.done {
            return OperationState::Pending;
        }
        match &self.raw.result {
            Some(operation::Result::Error(status)) if status.code == CANCELLED => OperationState::Cancelled,
            Some(operation::Result::Error(_)) => OperationState::Failed,
            _ => OperationState::Succeeded,
        }
    }

    /// update replaces the descriptor with the latest one fetched from the server.
    /// Nothing changes when the tracked operation is already done.
    /// Metadata that can not be decoded is skipped and the previous one is kept.
    pub fn update(&mut self, latest: InternalOperation) -> Result<(), Error> {
        if self.raw.done {
            return Ok(());
        }
        if latest.name != self.raw.name {
            return Err(Error::MalformedDescriptor(format!(
                "expected operation {} but got {}",
                self.raw.name, latest.name
            )));
        }
        if latest.done && latest.result.is_none() {
            return Err(Error::MalformedDescriptor(format!("{} is done without result", latest.name)));
        }
        if let Some(metadata) = decode_metadata(&latest) {
            self.metadata = Some(metadata);
        }
        tracing::debug!("operation {} done={}", latest.name, latest.done);
        self.raw = latest;
        Ok(())
    }

    /// result returns None while the operation is running.
    pub fn result(&self) -> Option<Result<T, Error>> {
        if !self.raw.done {
            return None;
        }
        let result = match &self.raw.result {
            Some(operation::Result::Response(any)) => T::decode(any.value.as_slice()).map_err(Error::Decode),
            Some(operation::Result::Error(status)) => Err(Error::RemoteJob(status.clone())),
            None => Err(Error::MalformedDescriptor(format!("{} is done without result", self.raw.name))),
        };
        Some(result)
    }
}

fn decode_metadata<M: Metadata>(raw: &InternalOperation) -> Option<M> {
    let any = raw.metadata.as_ref()?;
    let expected = M::type_name()?;
    let actual = any.type_url.rsplit('/').next().unwrap_or_default();
    if actual != expected {
        tracing::warn!("skip metadata of {}: expected {} but got {}", raw.name, expected, any.type_url);
        return None;
    }
    match M::decode(any.value.as_slice()) {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            tracing::warn!("skip metadata of {}: {}", raw.name, e);
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use googleapis::longrunning::Operation;

    use crate::state::testutil::{any, failed, pending, succeeded};
    use crate::state::{OperationState, Tracked};
    use crate::Error;

    type Job = Tracked<prost_types::Timestamp, prost_types::Duration>;

    #[test]
    fn test_empty_name_is_malformed() {
        let err = Job::new(Operation::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedDescriptor(_)));
    }

    #[test]
    fn test_done_without_result_is_malformed() {
        let raw = Operation {
            name: "operations/1".to_string(),
            done: true,
            ..Default::default()
        };
        assert!(matches!(Job::new(raw).unwrap_err(), Error::MalformedDescriptor(_)));
    }

    #[test]
    fn test_metadata_is_decoded_eagerly() {
        let job = Job::new(pending("operations/1", 10)).unwrap();
        assert_eq!(job.metadata().unwrap().seconds, 10);
        assert_eq!(job.state(), OperationState::Pending);
        assert!(job.result().is_none());

        let raw = Operation {
            name: "operations/2".to_string(),
            ..Default::default()
        };
        assert!(Job::new(raw).unwrap().metadata().is_none());
    }

    #[test]
    fn test_update_is_monotonic() {
        let mut job = Job::new(pending("operations/1", 10)).unwrap();
        job.update(succeeded("operations/1", 99)).unwrap();
        assert!(job.done());
        assert_eq!(job.state(), OperationState::Succeeded);

        job.update(pending("operations/1", 20)).unwrap();
        assert!(job.done());
        assert_eq!(job.metadata().unwrap().seconds, 100);
        assert_eq!(job.result().unwrap().unwrap().seconds, 99);
    }

    #[test]
    fn test_update_keeps_metadata_when_absent() {
        let mut job = Job::new(pending("operations/1", 10)).unwrap();
        let mut latest = pending("operations/1", 0);
        latest.metadata = None;
        job.update(latest).unwrap();
        assert_eq!(job.metadata().unwrap().seconds, 10);
    }

    #[test]
    fn test_update_rejects_other_operation() {
        let mut job = Job::new(pending("operations/1", 10)).unwrap();
        let err = job.update(succeeded("operations/2", 1)).unwrap_err();
        assert!(matches!(err, Error::MalformedDescriptor(_)));
        assert!(!job.done());
    }

    #[test]
    fn test_failed_and_cancelled() {
        let job = Job::new(failed("operations/1", 9, "precondition")).unwrap();
        assert_eq!(job.state(), OperationState::Failed);
        match job.result().unwrap().unwrap_err() {
            Error::RemoteJob(status) => {
                assert_eq!(status.code, 9);
                assert_eq!(status.message, "precondition");
            }
            e => panic!("unexpected error {e:?}"),
        }

        let job = Job::new(failed("operations/1", 1, "cancelled by user")).unwrap();
        assert_eq!(job.state(), OperationState::Cancelled);
        assert!(job.state().is_terminal());
    }

    #[test]
    fn test_undecodable_metadata_does_not_block_completion() {
        let mut job = Job::new(pending("operations/1", 10)).unwrap();
        let mut latest = succeeded("operations/1", 42);
        if let Some(metadata) = latest.metadata.as_mut() {
            metadata.value = vec![0xff, 0xff];
        }
        job.update(latest).unwrap();
        assert!(job.done());
        assert_eq!(job.state(), OperationState::Succeeded);
        assert_eq!(job.metadata().unwrap().seconds, 10);
        assert_eq!(job.result().unwrap().unwrap().seconds, 42);
    }

    #[test]
    fn test_metadata_of_other_type_is_skipped() {
        let mut raw = pending("operations/1", 10);
        raw.metadata = Some(any("type.googleapis.com/google.protobuf.Empty", &()));
        let mut job = Job::new(raw).unwrap();
        assert!(job.metadata().is_none());

        job.update(pending("operations/1", 20)).unwrap();
        assert_eq!(job.metadata().unwrap().seconds, 20);

        let mut latest = pending("operations/1", 30);
        latest.metadata = Some(any(
            "type.googleapis.com/google.protobuf.Timestamp",
            &prost_types::Timestamp { seconds: 30, nanos: 0 },
        ));
        job.update(latest).unwrap();
        assert_eq!(job.metadata().unwrap().seconds, 20);
    }

    #[test]
    fn test_ignored_metadata() {
        let job = Tracked::<prost_types::Timestamp, ()>::new(pending("operations/1", 10)).unwrap();
        assert!(job.metadata().is_none());
    }
}
