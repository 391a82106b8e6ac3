use std::time::Duration;

use tonic::metadata::{Ascii, MetadataKey, MetadataValue};
use tonic::Request;

pub use tokio_util::sync::CancellationToken;

use crate::retry::RetrySetting;

/// CallOptions are the per-call knobs handed to the invoker together with the request:
/// retry policy, timeout, extra header metadata and an optional cancellation token.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
    pub retry: Option<RetrySetting>,
    pub timeout: Option<Duration>,
    pub metadata: Vec<(String, String)>,
    pub cancel: Option<CancellationToken>,
}

impl CallOptions {
    pub fn with_retry(mut self, retry: RetrySetting) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// retry_or returns the configured retry setting, falling back to the method default.
    pub fn retry_or(&self, default: impl FnOnce() -> RetrySetting) -> RetrySetting {
        self.retry.clone().unwrap_or_else(default)
    }

    pub(crate) fn apply<T>(&self, request: &mut Request<T>) {
        if let Some(timeout) = self.timeout {
            request.set_timeout(timeout);
        }
        let target = request.metadata_mut();
        for (key, value) in &self.metadata {
            let key = match MetadataKey::<Ascii>::from_bytes(key.to_ascii_lowercase().as_bytes()) {
                Ok(key) => key,
                Err(_) => {
                    tracing::warn!("skip invalid metadata key: {}", key);
                    continue;
                }
            };
            match MetadataValue::<Ascii>::try_from(value.as_str()) {
                Ok(value) => {
                    target.append(key, value);
                }
                Err(_) => tracing::warn!("skip invalid metadata value for key {:?}", key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tonic::Request;

    use crate::call_option::CallOptions;
    use crate::retry::RetrySetting;

    #[test]
    fn test_retry_or() {
        let options = CallOptions::default();
        assert_eq!(options.retry_or(|| RetrySetting { take: 3, ..Default::default() }).take, 3);
        let options = options.with_retry(RetrySetting { take: 7, ..Default::default() });
        assert_eq!(options.retry_or(RetrySetting::default).take, 7);
    }

    #[test]
    fn test_apply_skips_invalid_metadata() {
        let options = CallOptions::default()
            .with_metadata("Valid-Key", "v")
            .with_metadata("invalid key", "v")
            .with_metadata("other", "bad\nvalue")
            .with_timeout(Duration::from_millis(100));
        let mut request = Request::new(());
        options.apply(&mut request);
        assert_eq!(request.metadata().get("valid-key").unwrap().to_str().unwrap(), "v");
        assert!(request.metadata().get("other").is_none());
        assert!(request.metadata().get("grpc-timeout").is_some());
    }
}
