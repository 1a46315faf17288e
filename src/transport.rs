//! Reqwest-backed access to the dashboard REST API.
//!
//! The transport owns request construction (auth and encoding headers, URL
//! building) and collapses every failure into an [`AppError`]: reqwest errors
//! become one of the [`TransportErrorKind`]s, non-2xx responses with a
//! recognized body become [`AppError::Backend`].

use std::time::Duration;

use reqwest::header::ACCEPT_ENCODING;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::errors::{AppError, AppResult, ErrorBody, TransportErrorKind};

/// Header carrying the session token on every authenticated request.
pub const AUTH_HEADER: &str = "x-albrd-authorization";

/// Credentials attached to outgoing requests.
///
/// Passed explicitly to every call instead of being read from shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Blank tokens are treated as no token.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Builds a transport whose requests fail with a timeout error after `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport_error)?;
        Ok(Self { client, base_url })
    }

    /// Parses `base_url` and builds the transport.
    pub fn from_base_url(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| {
            AppError::transport(
                TransportErrorKind::CustomError,
                format!("invalid API base URL `{base_url}`: {err}"),
            )
        })?;
        Self::new(base_url, timeout)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an API path such as `/survey/result/7` against the base URL.
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AppError::transport(
                    TransportErrorKind::CustomError,
                    format!("API base URL `{}` cannot carry a path", self.base_url),
                )
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    /// Issues one request and returns the decoded JSON body.
    ///
    /// An empty successful body decodes to [`Value::Null`]. No retries are performed.
    pub async fn send(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
    ) -> AppResult<Value> {
        let url = self.endpoint(path)?;
        log::debug!("{method} {path}");

        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT_ENCODING, "gzip")
            .query(query);
        if let Some(token) = session.token() {
            request = request.header(AUTH_HEADER, token);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_body(body.as_ref())
    }

    pub async fn get(
        &self,
        session: &Session,
        path: &str,
        query: &[(&'static str, String)],
    ) -> AppResult<Value> {
        self.send(session, Method::GET, path, query).await
    }

    pub async fn delete(&self, session: &Session, path: &str) -> AppResult<Value> {
        self.send(session, Method::DELETE, path, &[]).await
    }
}

fn parse_body(body: &[u8]) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|err| {
        AppError::transport(
            TransportErrorKind::ParsingError,
            format!("invalid JSON payload: {err}"),
        )
    })
}

fn map_transport_error(error: reqwest::Error) -> AppError {
    let kind = if error.is_timeout() {
        TransportErrorKind::TimeoutError
    } else if error.is_builder() {
        TransportErrorKind::CustomError
    } else if error.is_decode() {
        TransportErrorKind::ParsingError
    } else {
        TransportErrorKind::FetchError
    };
    AppError::transport(kind, error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AppError {
    if let Some(body) = ErrorBody::parse(body) {
        return AppError::Backend(body);
    }

    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    };
    AppError::transport(TransportErrorKind::ParsingError, message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
