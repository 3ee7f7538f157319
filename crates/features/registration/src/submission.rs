use crate::payload::SubmissionPayload;
use seva_domain::constants::GENERIC_FAILURE_MESSAGE;
use seva_identity::{AuthenticatedUser, Credentials};
use seva_kernel::api::{ApiClient, ApiEnvelope, ApiError};
use serde::Deserialize;
use std::borrow::Cow;
use std::future::Future;
use tracing::{info, warn};

/// Why a submission did not produce a receipt.
#[seva_derive::seva_error]
pub enum SubmissionError {
    /// The backend answered and said no.
    #[error("Submission rejected{}: {message}", format_context(.context))]
    Rejected { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// No usable answer: connection, timeout or an unreadable body.
    #[error("Submission failed{}: {source}", format_context(.context))]
    Api { source: ApiError, context: Option<Cow<'static, str>> },
    #[error("Internal submission error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SubmissionError {
    /// The one message shown to the user: the backend's own words when it sent any.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message.as_ref(),
            _ => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// What a successful registration hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub message: String,
    /// Present when the backend signs the new user in straight away.
    pub auto_login: Option<Credentials>,
}

impl SubmissionReceipt {
    fn from_envelope(envelope: &ApiEnvelope) -> Self {
        let token = envelope.field("token").and_then(|v| v.as_str()).map(str::to_owned);
        let user = envelope
            .field("user")
            .and_then(|v| AuthenticatedUser::deserialize(v).ok());
        let auto_login = token.zip(user).map(|(token, user)| Credentials { token, user });

        Self {
            message: envelope.message().unwrap_or("Registration successful").to_owned(),
            auto_login,
        }
    }
}

/// Sends a payload somewhere and interprets the answer.
pub trait Submitter {
    fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

/// Posts registrations to the REST backend.
#[derive(Debug, Clone)]
pub struct SubmissionAdapter {
    client: ApiClient,
}

impl SubmissionAdapter {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Submitter for SubmissionAdapter {
    /// One multipart `POST`, never retried.
    async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let flow = payload.flow();
        let form = payload.into_form().map_err(ApiError::from).context("Building multipart body")?;

        let response = self.client.post_multipart(flow.register_path(), form).await?;
        match response.into_result() {
            Ok(envelope) => {
                let receipt = SubmissionReceipt::from_envelope(&envelope);
                info!(%flow, auto_login = receipt.auto_login.is_some(), "Registration accepted");
                Ok(receipt)
            },
            Err(ApiError::Rejected { status, message, .. }) => {
                warn!(%flow, status, message = ?message, "Registration rejected");
                Err(SubmissionError::Rejected {
                    status,
                    message: message.map_or(GENERIC_FAILURE_MESSAGE.into(), Into::into),
                    context: None,
                })
            },
            Err(other) => Err(other.into()),
        }
    }
}
