use crate::draft::RegistrationDraft;
use crate::error::{RegistrationError, SubmitRefused};
use crate::flow::FlowKind;
use crate::navigator::StepNavigator;
use crate::payload::SubmissionPayload;
use crate::submission::{SubmissionError, SubmissionReceipt, Submitter};
use crate::validator::ValidationErrors;

/// Where the last submission attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(SubmissionReceipt),
    /// The message to show; the draft is untouched.
    Failed(String),
}

/// One open registration form: draft, position, displayed errors and submit status.
///
/// Submission is split in two so a UI can release its borrow while the request runs:
/// [`FormSession::begin_submit`] validates and hands out the payload,
/// [`FormSession::finish_submit`] applies the outcome. While a submission is in flight a
/// second `begin_submit` is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    draft: RegistrationDraft,
    navigator: StepNavigator,
    errors: ValidationErrors,
    status: SubmitStatus,
}

impl FormSession {
    #[must_use]
    pub fn new(flow: FlowKind) -> Self {
        Self {
            draft: RegistrationDraft::new(flow),
            navigator: StepNavigator::new(flow),
            errors: ValidationErrors::default(),
            status: SubmitStatus::Idle,
        }
    }

    #[must_use]
    pub const fn flow(&self) -> FlowKind {
        self.navigator.flow()
    }

    #[must_use]
    pub const fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Field edits; the last write wins.
    pub const fn draft_mut(&mut self) -> &mut RegistrationDraft {
        &mut self.draft
    }

    #[must_use]
    pub const fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    /// Errors from the most recent `next` or `begin_submit`.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Lets the UI drop a field's message as soon as it is edited.
    pub fn dismiss_error(&mut self, field: crate::Field) {
        self.errors.remove(field);
    }

    #[must_use]
    pub const fn status(&self) -> &SubmitStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting)
    }

    /// Validates the current step and advances when it passes.
    pub fn next(&mut self) -> bool {
        match self.navigator.next(&self.draft) {
            Ok(_) => {
                self.errors.clear();
                true
            },
            Err(errors) => {
                self.errors = errors;
                false
            },
        }
    }

    pub fn previous(&mut self) {
        self.navigator.previous();
        self.errors.clear();
    }

    /// Checks the final step and, if it passes, marks the session as submitting.
    ///
    /// # Errors
    /// [`SubmitRefused`] when a submission is already running, the form is not on its last
    /// step, or the last step has errors (these become [`FormSession::errors`]).
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmitRefused> {
        if self.is_submitting() {
            return Err(SubmitRefused::InFlight);
        }
        if !self.navigator.is_last() {
            return Err(SubmitRefused::NotAtFinalStep {
                step: self.navigator.current(),
                total: self.navigator.total(),
            });
        }
        if let Err(errors) = self.navigator.check_current(&self.draft) {
            self.errors = errors.clone();
            return Err(SubmitRefused::Invalid(errors));
        }

        let payload = SubmissionPayload::from_draft(&self.draft)
            .map_err(|e| SubmitRefused::Payload(e.to_string()))?;
        self.errors.clear();
        self.status = SubmitStatus::Submitting;
        tracing::debug!(flow = %self.flow(), "Submission started");
        Ok(payload)
    }

    /// Applies the outcome of the submission started by `begin_submit`.
    ///
    /// Success clears the draft and returns to step 1; failure keeps the draft. Returns
    /// `false` and changes nothing when no submission was in flight.
    pub fn finish_submit(
        &mut self,
        outcome: Result<SubmissionReceipt, SubmissionError>,
    ) -> bool {
        self.apply(outcome.as_ref())
    }

    /// `begin_submit`, one call to `submitter`, then `finish_submit`.
    ///
    /// # Errors
    /// [`RegistrationError::Refused`] when nothing was sent,
    /// [`RegistrationError::Submission`] when the request failed.
    pub async fn submit<S: Submitter>(
        &mut self,
        submitter: &S,
    ) -> Result<SubmissionReceipt, RegistrationError> {
        let payload = self.begin_submit()?;
        let outcome = submitter.submit(payload).await;
        self.apply(outcome.as_ref());
        outcome.map_err(RegistrationError::from)
    }

    fn apply(&mut self, outcome: Result<&SubmissionReceipt, &SubmissionError>) -> bool {
        if !self.is_submitting() {
            tracing::debug!(flow = %self.flow(), "Discarding late submission result");
            return false;
        }

        self.status = match outcome {
            Ok(receipt) => {
                self.draft.clear();
                self.navigator.reset();
                SubmitStatus::Succeeded(receipt.clone())
            },
            Err(err) => {
                tracing::warn!(flow = %self.flow(), error = %err, "Submission failed");
                SubmitStatus::Failed(err.user_message().to_owned())
            },
        };
        true
    }

    /// Abandons the form: empty draft, step 1, no messages.
    pub fn reset(&mut self) {
        *self = Self::new(self.flow());
    }
}
