use crate::validator::ValidationErrors;
use crate::submission::SubmissionError;
use std::borrow::Cow;

/// Why a form session refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRefused {
    #[error("A submission is already in flight")]
    InFlight,
    #[error("Submit is only available on step {total}, currently on step {step}")]
    NotAtFinalStep { step: u8, total: u8 },
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationErrors),
    #[error("Could not prepare the submission: {0}")]
    Payload(String),
}

/// Anything [`crate::FormSession::submit`] can end with besides a receipt.
#[seva_derive::seva_error]
pub enum RegistrationError {
    #[error("Submission not started{}: {source}", format_context(.context))]
    Refused { source: SubmitRefused, context: Option<Cow<'static, str>> },
    #[error("{source}{}", format_context(.context))]
    Submission { source: SubmissionError, context: Option<Cow<'static, str>> },
}
