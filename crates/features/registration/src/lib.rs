//! # Registration
//!
//! The multi-step Volunteer and SN Arya Mitra registration forms, without any UI:
//!
//! * [`RegistrationDraft`] holds what the user typed, including the cascading
//!   district → taluka choice ([`RegionSelector`]) and tag picks ([`TagSelection`]).
//! * [`validate`] checks one step; [`StepNavigator`] only moves forward past a clean step.
//! * [`SubmissionPayload`] turns a draft into a multipart body and [`SubmissionAdapter`]
//!   posts it, mapping the response envelope to a [`SubmissionReceipt`] or a
//!   [`SubmissionError`] carrying the backend's message.
//! * [`FormSession`] ties it together for a front end.
//!
//! ```rust
//! use seva_registration::{Field, FlowKind, FormSession};
//!
//! let mut form = FormSession::new(FlowKind::Volunteer);
//! assert!(!form.next());
//! assert!(form.errors().contains(Field::FullName));
//! assert_eq!(form.navigator().current(), 1);
//! ```

pub mod draft;
mod error;
pub mod field;
pub mod flow;
pub mod navigator;
pub mod payload;
pub mod selector;
pub mod session;
pub mod submission;
pub mod validator;

pub use crate::draft::{RegistrationDraft, TagSelection};
pub use crate::error::{RegistrationError, RegistrationErrorExt, SubmitRefused};
pub use crate::field::Field;
pub use crate::flow::{FlowKind, Section};
pub use crate::navigator::StepNavigator;
pub use crate::payload::{PartValue, SubmissionPayload};
pub use crate::selector::RegionSelector;
pub use crate::session::{FormSession, SubmitStatus};
pub use crate::submission::{
    SubmissionAdapter, SubmissionError, SubmissionErrorExt, SubmissionReceipt, Submitter,
};
pub use crate::validator::{ValidationErrors, validate, validate_all};
