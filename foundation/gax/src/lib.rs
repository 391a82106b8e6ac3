use tonic::IntoRequest;

use crate::call_option::CallOptions;
use crate::grpc::Request;

pub mod call_option;
pub mod conn;
pub mod endpoint;
pub mod retry;

pub mod grpc {
    pub use tonic::metadata;
    pub use tonic::{Code, IntoRequest, Request, Response, Status};
}

pub const REQUEST_PARAMS_HEADER: &str = "x-goog-request-params";

/// routing_header encodes the implicit routing parameters of a call.
/// Values are url encoded, except for `/` which is kept as is.
pub fn routing_header(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v).replace("%2F", "/")))
        .collect::<Vec<_>>()
        .join("&")
}

/// create_request builds the tonic request sent by every unary call:
/// routing header, per-call header metadata and the per-call timeout.
pub fn create_request<T>(
    params: &[(&str, &str)],
    into_request: impl IntoRequest<T>,
    options: &CallOptions,
) -> Request<T> {
    let mut request = into_request.into_request();
    let param_string = routing_header(params);
    if !param_string.is_empty() {
        match param_string.parse() {
            Ok(value) => {
                request.metadata_mut().append(REQUEST_PARAMS_HEADER, value);
            }
            Err(_) => tracing::warn!("routing header is not a valid metadata value: {}", param_string),
        }
    }
    options.apply(&mut request);
    request
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::call_option::CallOptions;
    use crate::{create_request, routing_header, REQUEST_PARAMS_HEADER};

    #[test]
    fn test_routing_header() {
        assert_eq!(
            routing_header(&[("parent", "projects/p/instances/i")]),
            "parent=projects/p/instances/i"
        );
        assert_eq!(routing_header(&[("backup.name", "a b"), ("x", "y")]), "backup.name=a%20b&x=y");
        assert_eq!(routing_header(&[]), "");
    }

    #[test]
    fn test_create_request() {
        let options = CallOptions::default()
            .with_timeout(Duration::from_secs(3))
            .with_metadata("x-custom", "value");
        let request = create_request(&[("name", "projects/p/instances/i/databases/d")], (), &options);
        let metadata = request.metadata();
        assert_eq!(
            metadata.get(REQUEST_PARAMS_HEADER).unwrap().to_str().unwrap(),
            "name=projects/p/instances/i/databases/d"
        );
        assert_eq!(metadata.get("x-custom").unwrap().to_str().unwrap(), "value");
        assert!(metadata.get("grpc-timeout").is_some());
    }

    #[test]
    fn test_create_request_without_params() {
        let request = create_request(&[], (), &CallOptions::default());
        assert!(request.metadata().get(REQUEST_PARAMS_HEADER).is_none());
    }
}
