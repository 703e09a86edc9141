// File: src/origin.rs
// Purpose: Base URL of the inbound request, honouring reverse-proxy headers

use axum::http::{
    header::{HOST, ORIGIN},
    HeaderMap, HeaderName,
};
use url::Url;

pub const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");
pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

/// `X-Forwarded-Proto` values that mean the client connection is secure
const SECURE_PROTOS: [&str; 4] = ["https", "on", "ssl", "1"];

/// Where the current request came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin {
    forwarded_proto: Option<String>,
    forwarded_host: Option<String>,
    host: Option<String>,
    origin: Option<String>,
    tls: bool,
}

fn header(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First element of a comma separated proxy header
fn first_hop(value: String) -> String {
    match value.split_once(',') {
        Some((first, _)) => first.trim().to_string(),
        None => value,
    }
}

impl RequestOrigin {
    /// Reads the relevant headers; `tls` says whether this server terminates TLS
    pub fn from_headers(headers: &HeaderMap, tls: bool) -> Self {
        Self {
            forwarded_proto: header(headers, &X_FORWARDED_PROTO).map(first_hop),
            forwarded_host: header(headers, &X_FORWARDED_HOST).map(first_hop),
            host: header(headers, &HOST),
            origin: header(headers, &ORIGIN),
            tls,
        }
    }

    /// Forwarded protocol wins over the server's own TLS setting
    pub fn is_secure(&self) -> bool {
        match &self.forwarded_proto {
            Some(proto) => SECURE_PROTOS.iter().any(|p| proto.eq_ignore_ascii_case(p)),
            None => self.tls,
        }
    }

    pub fn scheme(&self) -> &'static str {
        if self.is_secure() {
            "https"
        } else {
            "http"
        }
    }

    /// `X-Forwarded-Host`, else `Host`
    pub fn host(&self) -> Option<&str> {
        self.forwarded_host.as_deref().or(self.host.as_deref())
    }

    /// `Origin` header, else `{scheme}://{host}`
    pub fn origin(&self) -> Option<String> {
        self.origin
            .clone()
            .or_else(|| self.host().map(|host| format!("{}://{}", self.scheme(), host)))
    }

    pub fn base_url(&self) -> Option<Url> {
        let origin = self.origin()?;
        Url::parse(&origin)
            .map_err(|e| tracing::debug!(%origin, error = %e, "request origin is not a valid url"))
            .ok()
    }

    /// The `url` and `port` fields of the route manifest
    ///
    /// `url` is the origin without a trailing slash; `port` is only set when
    /// the origin names one explicitly.
    pub fn manifest_location(&self) -> (Option<String>, Option<u16>) {
        match self.base_url() {
            Some(url) => {
                let text = url.as_str().trim_end_matches('/').to_string();
                (Some(text), url.port())
            }
            None => (None, None),
        }
    }
}
