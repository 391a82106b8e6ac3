use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use http::header::AUTHORIZATION;
use http::{HeaderValue, Request};
use tonic::body::BoxBody;
use tonic::transport::{Channel as TonicChannel, ClientTlsConfig, Endpoint, Identity};
use tonic::{Code, Status};
use tower::filter::{AsyncFilter, AsyncFilterLayer, AsyncPredicate};
use tower::util::Either;
use tower::{BoxError, ServiceBuilder};

use token_source::{TokenSource, TokenSourceProvider};

use crate::endpoint::ResolvedEndpoint;

pub type Channel = Either<AsyncFilter<TonicChannel, AsyncAuthInterceptor>, TonicChannel>;

#[derive(Clone, Debug)]
pub struct AsyncAuthInterceptor {
    token_source: Arc<dyn TokenSource>,
}

impl AsyncAuthInterceptor {
    fn new(token_source: Arc<dyn TokenSource>) -> Self {
        Self { token_source }
    }
}

impl AsyncPredicate<Request<BoxBody>> for AsyncAuthInterceptor {
    type Future = Pin<Box<dyn Future<Output = Result<Self::Request, BoxError>> + Send>>;
    type Request = Request<BoxBody>;

    fn check(&mut self, request: Request<BoxBody>) -> Self::Future {
        let ts = self.token_source.clone();
        Box::pin(async move {
            let token = ts
                .token()
                .await
                .map_err(|e| Status::new(Code::Unauthenticated, format!("token error: {e:?}")))?;
            let token_header = HeaderValue::from_str(token.as_str())
                .map_err(|e| Status::new(Code::Unauthenticated, format!("token error: {e:?}")))?;
            let (mut parts, body) = request.into_parts();
            parts.headers.insert(AUTHORIZATION, token_header);
            Ok(Request::from_parts(parts, body))
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("tonic error : {0}")]
    TonicTransport(#[from] tonic::transport::Error),

    #[error("invalid emulator host: {0}")]
    InvalidEmulatorHOST(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("connection pool size must be greater than zero")]
    EmptyPool,
}

#[derive(Debug)]
pub enum Environment {
    Emulator(String),
    GoogleCloud(Box<dyn TokenSourceProvider>),
}

#[derive(Debug)]
struct AtomicRing<T>
where
    T: Clone + Debug,
{
    index: AtomicUsize,
    values: Vec<T>,
}

impl<T> AtomicRing<T>
where
    T: Clone + Debug,
{
    fn next(&self) -> T {
        let current = self.index.fetch_add(1, Ordering::SeqCst);
        //clone() reuses http/2 connection
        self.values[current % self.values.len()].clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Defers the connection until the first call is sent.
    pub lazy: bool,
}

impl ConnectionOptions {
    fn apply(&self, mut endpoint: Endpoint) -> Endpoint {
        if let Some(t) = self.timeout {
            endpoint = endpoint.timeout(t);
        }
        if let Some(t) = self.connect_timeout {
            endpoint = endpoint.connect_timeout(t);
        }
        endpoint
    }
}

/// ConnectionManager hands out the pooled channels in round robin order.
#[derive(Debug)]
pub struct ConnectionManager {
    inner: AtomicRing<Channel>,
}

impl ConnectionManager {
    pub async fn new(
        pool_size: usize,
        endpoint: &ResolvedEndpoint,
        environment: &Environment,
        conn_options: &ConnectionOptions,
    ) -> Result<Self, Error> {
        if pool_size == 0 {
            return Err(Error::EmptyPool);
        }
        let conns = match environment {
            Environment::GoogleCloud(ts_provider) => {
                Self::create_connections(pool_size, endpoint, ts_provider.as_ref(), conn_options).await?
            }
            Environment::Emulator(host) => Self::create_emulator_connections(host, conn_options).await?,
        };
        Ok(Self {
            inner: AtomicRing {
                index: AtomicUsize::new(0),
                values: conns,
            },
        })
    }

    async fn create_connections(
        pool_size: usize,
        endpoint: &ResolvedEndpoint,
        ts_provider: &dyn TokenSourceProvider,
        conn_options: &ConnectionOptions,
    ) -> Result<Vec<Channel>, Error> {
        let domain_name = endpoint.host.split(':').next().unwrap_or_default().to_string();
        let mut tls_config = ClientTlsConfig::new().with_webpki_roots().domain_name(domain_name);
        if let Some(cert) = &endpoint.client_certificate {
            tls_config = tls_config.identity(Identity::from_pem(&cert.cert_pem, &cert.key_pem));
        }
        let mut conns = Vec::with_capacity(pool_size);

        let ts = ts_provider.token_source();

        for _ in 0..pool_size {
            let uri = format!("https://{}", endpoint.host);
            let tonic_endpoint = TonicChannel::from_shared(uri.clone())
                .map_err(|_| Error::InvalidEndpoint(uri))?
                .tls_config(tls_config.clone())?;
            let tonic_endpoint = conn_options.apply(tonic_endpoint);

            let con = Self::connect(tonic_endpoint, conn_options.lazy).await?;
            // use GCP token per call
            let auth_layer = Some(AsyncFilterLayer::new(AsyncAuthInterceptor::new(Arc::clone(&ts))));
            let auth_con = ServiceBuilder::new().option_layer(auth_layer).service(con);
            conns.push(auth_con);
        }
        tracing::debug!("created {} connections to {}", conns.len(), endpoint.host);
        Ok(conns)
    }

    async fn create_emulator_connections(host: &str, conn_options: &ConnectionOptions) -> Result<Vec<Channel>, Error> {
        let mut conns = Vec::with_capacity(1);
        let endpoint = TonicChannel::from_shared(format!("http://{host}").into_bytes())
            .map_err(|_| Error::InvalidEmulatorHOST(host.to_string()))?;
        let endpoint = conn_options.apply(endpoint);

        let con = Self::connect(endpoint, conn_options.lazy).await?;
        conns.push(
            ServiceBuilder::new()
                .option_layer::<AsyncFilterLayer<AsyncAuthInterceptor>>(None)
                .service(con),
        );
        tracing::debug!("created emulator connection to {}", host);
        Ok(conns)
    }

    async fn connect(endpoint: Endpoint, lazy: bool) -> Result<TonicChannel, tonic::transport::Error> {
        if lazy {
            return Ok(endpoint.connect_lazy());
        }
        endpoint.connect().await
    }

    pub fn num(&self) -> usize {
        self.inner.values.len()
    }

    pub fn conn(&self) -> Channel {
        self.inner.next()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::conn::{AtomicRing, ConnectionManager, ConnectionOptions, Environment, Error};
    use crate::endpoint::ResolvedEndpoint;

    #[test]
    fn test_atomic_ring_wraps_around() {
        let ring = AtomicRing::<&str> {
            index: AtomicUsize::new(usize::MAX - 1),
            values: vec!["a", "b", "c", "d"],
        };
        let mut seen = HashSet::new();
        for _ in 0..4 {
            assert!(seen.insert(ring.next()));
        }
        assert_eq!(2, ring.index.load(Ordering::SeqCst));
        assert!(!seen.insert(ring.next()));
    }

    fn endpoint() -> ResolvedEndpoint {
        ResolvedEndpoint {
            host: "spanner.googleapis.com".to_string(),
            client_certificate: None,
        }
    }

    #[tokio::test]
    async fn test_lazy_emulator_connection() {
        let options = ConnectionOptions {
            lazy: true,
            ..Default::default()
        };
        let cm = ConnectionManager::new(4, &endpoint(), &Environment::Emulator("localhost:9010".to_string()), &options)
            .await
            .unwrap();
        assert_eq!(cm.num(), 1);
    }

    #[tokio::test]
    async fn test_empty_pool() {
        let err = ConnectionManager::new(
            0,
            &endpoint(),
            &Environment::Emulator("localhost:9010".to_string()),
            &ConnectionOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::EmptyPool));
    }

    #[tokio::test]
    async fn test_invalid_emulator_host() {
        let options = ConnectionOptions {
            lazy: true,
            ..Default::default()
        };
        let err = ConnectionManager::new(1, &endpoint(), &Environment::Emulator("local host".to_string()), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidEmulatorHOST(_)));
    }
}
