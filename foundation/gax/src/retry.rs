use std::future::Future;
use std::iter::Take;
use std::time::Duration;

use tokio::select;

use crate::call_option::CancellationToken;
use crate::grpc::{Code, Status};

/// ExponentialBackoff yields `current * factor` and multiplies `current` by `base` on every step,
/// capped by `max_delay`.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    current: u64,
    base: u64,
    factor: u64,
    max_delay: Option<Duration>,
}

impl ExponentialBackoff {
    pub fn from_millis(base: u64) -> ExponentialBackoff {
        ExponentialBackoff {
            current: base,
            base,
            factor: 1u64,
            max_delay: None,
        }
    }

    pub fn factor(mut self, factor: u64) -> ExponentialBackoff {
        self.factor = factor;
        self
    }

    pub fn max_delay(mut self, duration: Duration) -> ExponentialBackoff {
        self.max_delay = Some(duration);
        self
    }
}

impl Iterator for ExponentialBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let duration = match self.current.checked_mul(self.factor) {
            Some(millis) => Duration::from_millis(millis),
            None => Duration::from_millis(u64::MAX),
        };

        if let Some(ref max_delay) = self.max_delay {
            if duration > *max_delay {
                return Some(*max_delay);
            }
        }

        self.current = self.current.checked_mul(self.base).unwrap_or(u64::MAX);
        Some(duration)
    }
}

pub trait TryAs<T> {
    fn try_as(&self) -> Option<&T>;
}

impl TryAs<Status> for Status {
    fn try_as(&self) -> Option<&Status> {
        Some(self)
    }
}

pub trait Predicate<E> {
    fn should_retry(&mut self, error: &E) -> bool;
}

pub trait Retry<E: TryAs<Status>, T: Predicate<E>> {
    fn strategy(&self) -> Take<ExponentialBackoff>;
    fn predicate(&self) -> T;
}

pub struct CodePredicate {
    codes: Vec<Code>,
}

impl CodePredicate {
    pub fn new(codes: Vec<Code>) -> Self {
        Self { codes }
    }
}

impl<E> Predicate<E> for CodePredicate
where
    E: TryAs<Status>,
{
    fn should_retry(&mut self, error: &E) -> bool {
        match error.try_as() {
            Some(status) => self.codes.contains(&status.code()),
            None => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RetrySetting {
    pub from_millis: u64,
    pub max_delay: Option<Duration>,
    pub factor: u64,
    pub take: usize,
    pub codes: Vec<Code>,
}

impl Retry<Status, CodePredicate> for RetrySetting {
    fn strategy(&self) -> Take<ExponentialBackoff> {
        let mut st = ExponentialBackoff::from_millis(self.from_millis).factor(self.factor);
        st.max_delay = self.max_delay;
        st.take(self.take)
    }

    fn predicate(&self) -> CodePredicate {
        CodePredicate::new(self.codes.clone())
    }
}

impl Default for RetrySetting {
    fn default() -> Self {
        Self {
            from_millis: 10,
            max_delay: Some(Duration::from_secs(1)),
            factor: 1u64,
            take: 5,
            codes: vec![Code::Unavailable, Code::Unknown, Code::Aborted],
        }
    }
}

/// invoke is the RPC invoker used by every client method.
/// The action is repeated while the retry predicate accepts the error and the strategy has delays left.
/// The last error is returned as is.
pub async fn invoke<A, R, RT, C, E>(
    cancel: Option<CancellationToken>,
    retry: Option<RT>,
    mut action: impl FnMut() -> A,
) -> Result<R, E>
where
    E: TryAs<Status> + From<Status>,
    A: Future<Output = Result<R, E>>,
    C: Predicate<E>,
    RT: Retry<E, C> + Default,
{
    let fn_loop = async {
        let retry = retry.unwrap_or_default();
        let mut strategy = retry.strategy();
        let mut predicate = retry.predicate();
        loop {
            let status = match action().await {
                Ok(s) => return Ok(s),
                Err(e) => e,
            };
            if !predicate.should_retry(&status) {
                return Err(status);
            }
            match strategy.next() {
                None => return Err(status),
                Some(duration) => {
                    tracing::debug!("retrying rpc after {:?}", duration);
                    tokio::time::sleep(duration).await
                }
            };
        }
    };

    match cancel {
        Some(cancel) => {
            select! {
                _ = cancel.cancelled() => Err(Status::cancelled("client cancel").into()),
                v = fn_loop => v
            }
        }
        None => fn_loop.await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::call_option::CancellationToken;
    use crate::grpc::{Code, Status};
    use crate::retry::{invoke, ExponentialBackoff, Retry, RetrySetting};

    #[test]
    fn test_exponential_backoff() {
        let delays: Vec<Duration> = ExponentialBackoff::from_millis(2)
            .factor(50)
            .max_delay(Duration::from_millis(500))
            .take(5)
            .collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(500),
                Duration::from_millis(500),
            ]
        );
    }

    #[test]
    fn test_strategy_uses_factor() {
        let setting = RetrySetting {
            from_millis: 10,
            max_delay: None,
            factor: 3,
            take: 2,
            codes: vec![],
        };
        let delays: Vec<Duration> = setting.strategy().collect();
        assert_eq!(delays, vec![Duration::from_millis(30), Duration::from_millis(300)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invoke_retries_retryable_code() {
        let calls = Arc::new(AtomicUsize::new(0));
        let action = || {
            let calls = calls.clone();
            async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(Status::unavailable("try again"))
                } else {
                    Ok("done")
                }
            }
        };
        let result: Result<&str, Status> = invoke(None, Some(RetrySetting::default()), action).await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_invoke_returns_non_retryable_error_verbatim() {
        let calls = Arc::new(AtomicUsize::new(0));
        let action = || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), Status>(Status::invalid_argument("bad parent"))
            }
        };
        let err = invoke(None, Some(RetrySetting::default()), action).await.unwrap_err();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(err.message(), "bad parent");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invoke_gives_up_after_take() {
        let calls = Arc::new(AtomicUsize::new(0));
        let action = || {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), Status>(Status::unavailable("down"))
            }
        };
        let setting = RetrySetting {
            take: 2,
            ..Default::default()
        };
        let err = invoke(None, Some(setting), action).await.unwrap_err();
        assert_eq!(err.code(), Code::Unavailable);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_invoke_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let action = || async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<(), Status>(())
        };
        let err = invoke(Some(cancel), Some(RetrySetting::default()), action)
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Cancelled);
    }
}
