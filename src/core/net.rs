// src/core/net.rs
// One blocking HTTP GET per lookup. The controller only sees `Transport`, so
// tests and alternative front ends can swap the wire out.

use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

use crate::config::consts::QUERY_PARAM;
use crate::config::options::LookupOptions;

/// Status + body of a completed request. Non-2xx statuses are still `Ok` here;
/// interpreting them is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    /// Set when headers arrived but the body could not be read to the end.
    pub read_error: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into(), read_error: None }
    }

    /// Response whose body broke off mid-read.
    pub fn unreadable(status: u16, err: impl Into<String>) -> Self {
        Self { status, body: s!(), read_error: Some(err.into()) }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request could not complete at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<HttpResponse, TransportError> + Send + Sync,
{
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self(url)
    }
}

/// reqwest-backed transport. The client timeout is the only timeout in play.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(opts: &LookupOptions) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;

        // Past this point the server answered; a failed body read is not a
        // connectivity problem.
        let status = resp.status().as_u16();
        match resp.text() {
            Ok(body) => Ok(HttpResponse::new(status, body)),
            Err(e) => Ok(HttpResponse::unreadable(status, e.to_string())),
        }
    }
}

/// Validated base endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    pub fn parse(s: &str) -> Result<Self, url::ParseError> {
        Url::parse(s.trim()).map(Endpoint)
    }

    /// `<base>?query=<percent-encoded>`; appended with `&` if the base already
    /// carries a query string. Spaces become `%20`, not `+`.
    pub fn url_for(&self, query: &str) -> String {
        let base = self.0.as_str();
        let sep = if self.0.query().is_some() { '&' } else { '?' };
        format!("{base}{sep}{QUERY_PARAM}={}", urlencoding::encode(query))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
