//! REST plumbing shared by the registration and directory slices.
//!
//! The backend answers with a loose JSON envelope:
//! `{ "success": bool, "data" | "<resource>": payload, "message": "..." }`. Some endpoints
//! return a bare array instead; [`ApiEnvelope::parse`] treats that as a successful payload.

use reqwest::multipart::Form;
use seva_domain::config::ApiConfig;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[seva_derive::seva_error]
pub enum ApiError {
    #[error("Request failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
    #[error("Malformed response{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error(
        "Backend rejected the request (status {status}){}: {}",
        format_context(.context),
        .message.as_deref().unwrap_or("no message")
    )]
    Rejected { status: u16, message: Option<String>, context: Option<Cow<'static, str>> },
    #[error("Response has no payload{}: {resource}", format_context(.context))]
    MissingPayload { resource: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    /// The human readable message the backend attached to a rejection, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Decoded response envelope.
#[seva_derive::api_model]
#[derive(Default, PartialEq)]
pub struct ApiEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ApiEnvelope {
    /// Parses a response body, accepting either an envelope object or a bare array.
    ///
    /// # Errors
    /// Returns [`ApiError::Decode`] for anything that is not JSON, or JSON that is neither
    /// an object nor an array.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        match serde_json::from_slice::<Value>(body).context("Parsing response body")? {
            Value::Array(items) => {
                let mut fields = Map::new();
                fields.insert("data".to_owned(), Value::Array(items));
                Ok(Self { success: Some(true), message: None, fields })
            },
            value @ Value::Object(_) => {
                serde_json::from_value::<Self>(value).context("Decoding response envelope")
            },
            other => Err(ApiError::Internal {
                message: format!("Expected a JSON object or array, got {other}").into(),
                context: None,
            }),
        }
    }

    /// A missing `success` flag counts as success; HTTP status decides in that case.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }

    /// The backend message, ignoring blank strings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }

    /// The payload under `data`, falling back to the resource name.
    #[must_use]
    pub fn payload(&self, resource: &str) -> Option<&Value> {
        self.fields.get("data").filter(|v| !v.is_null()).or_else(|| self.fields.get(resource))
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Deserialises the payload found by [`ApiEnvelope::payload`].
    ///
    /// # Errors
    /// [`ApiError::MissingPayload`] when neither key is present, [`ApiError::Decode`] when
    /// the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, resource: &'static str) -> Result<T, ApiError> {
        let payload = self.payload(resource).ok_or(ApiError::MissingPayload {
            resource: Cow::Borrowed(resource),
            context: None,
        })?;
        T::deserialize(payload).context(resource)
    }
}

/// An HTTP status plus the decoded envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub envelope: ApiEnvelope,
}

impl ApiResponse {
    /// Succeeds only when both the HTTP status and the envelope report success.
    ///
    /// # Errors
    /// [`ApiError::Rejected`] carrying the backend message when present.
    pub fn into_result(self) -> Result<ApiEnvelope, ApiError> {
        if (200..300).contains(&self.status) && self.envelope.is_success() {
            Ok(self.envelope)
        } else {
            Err(ApiError::Rejected {
                status: self.status,
                message: self.envelope.message().map(str::to_owned),
                context: None,
            })
        }
    }
}

/// A cheap-to-clone handle on the REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Builds a client from the `[api]` config section.
    ///
    /// # Errors
    /// [`ApiError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.base_url, Duration::from_secs(config.timeout_seconds))
    }

    /// # Errors
    /// [`ApiError::Transport`] if the TLS backend cannot be initialised.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("seva/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building HTTP client")?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').into() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL with exactly one slash.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path`, returning the status and envelope.
    ///
    /// # Errors
    /// [`ApiError::Transport`] on connection failures or timeouts, [`ApiError::Decode`]
    /// when a successful status carries an unreadable body.
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await.context(url)?;
        read_response(response).await
    }

    /// `POST path` with a multipart body. Exactly one request is made.
    ///
    /// # Errors
    /// As for [`ApiClient::get`].
    pub async fn post_multipart(&self, path: &str, form: Form) -> Result<ApiResponse, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST multipart");
        let response = self.http.post(&url).multipart(form).send().await.context(url)?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<ApiResponse, ApiError> {
    let status = response.status();
    let body = response.bytes().await.context("Reading response body")?;

    let envelope = match ApiEnvelope::parse(&body) {
        Ok(envelope) => envelope,
        // Error pages are often HTML; the status alone is enough to report a rejection.
        Err(err) if !status.is_success() => {
            warn!(status = status.as_u16(), error = %err, "Unreadable error response");
            ApiEnvelope { success: Some(false), ..ApiEnvelope::default() }
        },
        Err(err) => return Err(err),
    };

    debug!(status = status.as_u16(), success = envelope.is_success(), "Response received");
    Ok(ApiResponse { status: status.as_u16(), envelope })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_arrays_become_data() {
        let envelope = ApiEnvelope::parse(br#"[{"id":"a"}]"#).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.payload("volunteers").and_then(Value::as_array).map(Vec::len), Some(1));
    }

    #[test]
    fn resource_key_is_used_without_data() {
        let envelope =
            ApiEnvelope::parse(br#"{"success":true,"aryaMitras":[1,2,3]}"#).unwrap();
        let ids: Vec<u8> = envelope.decode("aryaMitras").unwrap();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn data_wins_over_resource_key() {
        let envelope = ApiEnvelope::parse(br#"{"data":[1],"stats":[2]}"#).unwrap();
        let values: Vec<u8> = envelope.decode("stats").unwrap();
        assert_eq!(values, [1]);
    }

    #[test]
    fn missing_payload_is_reported() {
        let envelope = ApiEnvelope::parse(br#"{"success":true}"#).unwrap();
        let err = envelope.decode::<Vec<u8>>("volunteers").unwrap_err();
        assert!(matches!(err, ApiError::MissingPayload { .. }));
    }

    #[test]
    fn scalars_are_not_envelopes() {
        assert!(ApiEnvelope::parse(b"42").is_err());
        assert!(matches!(ApiEnvelope::parse(b"<html>"), Err(ApiError::Decode { .. })));
    }

    #[test]
    fn rejection_keeps_backend_message() {
        let response = ApiResponse {
            status: 409,
            envelope: ApiEnvelope::parse(
                br#"{"success":false,"message":"Email already registered"}"#,
            )
            .unwrap(),
        };
        let err = response.into_result().unwrap_err();
        assert_eq!(err.backend_message(), Some("Email already registered"));
    }

    #[test]
    fn success_flag_false_is_a_rejection_even_with_200() {
        let response = ApiResponse {
            status: 200,
            envelope: ApiEnvelope { success: Some(false), ..ApiEnvelope::default() },
        };
        assert!(matches!(response.into_result(), Err(ApiError::Rejected { status: 200, .. })));
    }

    #[test]
    fn urls_join_with_one_slash() {
        let client =
            ApiClient::with_base_url("http://localhost:4590/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.url("/volunteers"), "http://localhost:4590/api/volunteers");
        assert_eq!(client.url("stats"), "http://localhost:4590/api/stats");
    }
}
