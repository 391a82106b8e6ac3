use std::str::FromStr;

pub const USE_CLIENT_CERTIFICATE_ENV: &str = "GOOGLE_API_USE_CLIENT_CERTIFICATE";
pub const USE_MTLS_ENDPOINT_ENV: &str = "GOOGLE_API_USE_MTLS_ENDPOINT";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("environment variable `GOOGLE_API_USE_CLIENT_CERTIFICATE` must be either `true` or `false`: {0}")]
    InvalidUseClientCertificate(String),
    #[error("environment variable `GOOGLE_API_USE_MTLS_ENDPOINT` must be `never`, `auto` or `always`: {0}")]
    InvalidUseMtlsEndpoint(String),
}

/// PEM encoded client certificate and private key used for mutual TLS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCertificate {
    pub cert_pem: Vec<u8>,
    pub key_pem: Vec<u8>,
}

#[derive(Clone, Debug, Default)]
pub struct EndpointOptions {
    /// Overrides every other endpoint selection rule when set.
    pub api_endpoint: Option<String>,
    /// Only used when `GOOGLE_API_USE_CLIENT_CERTIFICATE` is `true`.
    pub client_certificate: Option<ClientCertificate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MtlsMode {
    Auto,
    Never,
    Always,
}

impl FromStr for MtlsMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(MtlsMode::Auto),
            "never" => Ok(MtlsMode::Never),
            "always" => Ok(MtlsMode::Always),
            other => Err(Error::InvalidUseMtlsEndpoint(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub host: String,
    pub client_certificate: Option<ClientCertificate>,
}

/// default_mtls_endpoint converts `*.googleapis.com` to `*.mtls.googleapis.com`
/// and `*.sandbox.googleapis.com` to `*.mtls.sandbox.googleapis.com`.
/// Endpoints that are already mTLS or outside of googleapis.com are returned unchanged.
pub fn default_mtls_endpoint(api_endpoint: &str) -> String {
    let rest = match api_endpoint.find('.') {
        Some(i) if i > 0 => &api_endpoint[i..],
        _ => return api_endpoint.to_string(),
    };
    let (mtls, rest) = match rest.strip_prefix(".mtls") {
        Some(r) => (true, r),
        None => (false, rest),
    };
    let (sandbox, rest) = match rest.strip_prefix(".sandbox") {
        Some(r) => (true, r),
        None => (false, rest),
    };
    if mtls || !rest.starts_with(".googleapis.com") {
        return api_endpoint.to_string();
    }
    if sandbox {
        return api_endpoint.replace("sandbox.googleapis.com", "mtls.sandbox.googleapis.com");
    }
    api_endpoint.replace(".googleapis.com", ".mtls.googleapis.com")
}

/// resolve selects the endpoint and client certificate from the options and the process environment.
pub fn resolve(default_endpoint: &str, options: &EndpointOptions) -> Result<ResolvedEndpoint, Error> {
    let use_client_cert = std::env::var(USE_CLIENT_CERTIFICATE_ENV).ok();
    let use_mtls_endpoint = std::env::var(USE_MTLS_ENDPOINT_ENV).ok();
    resolve_with(
        default_endpoint,
        options,
        use_client_cert.as_deref(),
        use_mtls_endpoint.as_deref(),
    )
}

pub fn resolve_with(
    default_endpoint: &str,
    options: &EndpointOptions,
    use_client_cert: Option<&str>,
    use_mtls_endpoint: Option<&str>,
) -> Result<ResolvedEndpoint, Error> {
    let use_client_cert = match use_client_cert.unwrap_or("false") {
        "true" => true,
        "false" => false,
        other => return Err(Error::InvalidUseClientCertificate(other.to_string())),
    };
    let mode = MtlsMode::from_str(use_mtls_endpoint.unwrap_or("auto"))?;

    let client_certificate = if use_client_cert {
        options.client_certificate.clone()
    } else {
        None
    };

    let host = match &options.api_endpoint {
        Some(endpoint) => endpoint.clone(),
        None => match mode {
            MtlsMode::Always => default_mtls_endpoint(default_endpoint),
            MtlsMode::Auto if client_certificate.is_some() => default_mtls_endpoint(default_endpoint),
            _ => default_endpoint.to_string(),
        },
    };
    Ok(ResolvedEndpoint {
        host,
        client_certificate,
    })
}
