//! Draft → multipart body.
//!
//! Scalars become text parts, list values (tags, availability) become one part holding a
//! JSON array, attachments become file parts named after their field.

use crate::draft::RegistrationDraft;
use crate::field::Field;
use crate::flow::FlowKind;
use reqwest::multipart::{Form, Part};
use seva_domain::registration::Attachment;

/// The value of one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(Attachment),
}

/// A snapshot of a draft, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    flow: FlowKind,
    parts: Vec<(Field, PartValue)>,
}

impl SubmissionPayload {
    /// Copies the non-empty values out of `draft`.
    ///
    /// # Errors
    /// Fails only if a list value cannot be JSON-encoded.
    pub fn from_draft(draft: &RegistrationDraft) -> Result<Self, serde_json::Error> {
        let flow = draft.flow();
        let mut parts = Vec::new();
        let mut text = |field: Field, value: &str| {
            let value = value.trim();
            if !value.is_empty() {
                parts.push((field, PartValue::Text(value.to_owned())));
            }
        };

        for field in [
            Field::FullName,
            Field::Email,
            Field::Phone,
            Field::AlternatePhone,
            Field::Age,
            Field::Occupation,
            Field::Organisation,
            Field::Address,
            Field::PostalCode,
            Field::IdNumber,
            Field::Skills,
            Field::Motivation,
            Field::Experience,
            Field::EmergencyName,
            Field::EmergencyPhone,
            Field::EmergencyRelation,
        ] {
            text(field, draft.text(field).unwrap_or_default());
        }
        text(Field::Gender, draft.gender.map(|g| g.as_str()).unwrap_or_default());
        text(Field::Region, draft.location.region().unwrap_or_default());
        text(Field::SubRegion, draft.location.sub_region().unwrap_or_default());
        text(Field::IdKind, draft.id_kind.map(|k| k.as_str()).unwrap_or_default());
        text(Field::Consent, if draft.consent { "true" } else { "false" });

        let tags: Vec<&str> = draft.tags.values().collect();
        parts.push((flow.tag_field(), PartValue::Text(serde_json::to_string(&tags)?)));
        if !draft.availability.is_empty() || flow == FlowKind::Volunteer {
            parts.push((Field::Availability, PartValue::Text(serde_json::to_string(&draft.availability)?)));
        }

        for field in [Field::IdDocument, Field::Photo] {
            if let Some(file) = draft.attachment(field) {
                parts.push((field, PartValue::File(file.clone())));
            }
        }

        Ok(Self { flow, parts })
    }

    #[must_use]
    pub const fn flow(&self) -> FlowKind {
        self.flow
    }

    pub fn parts(&self) -> impl Iterator<Item = (Field, &PartValue)> {
        self.parts.iter().map(|(field, value)| (*field, value))
    }

    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        self.parts.iter().find_map(|(f, value)| match value {
            PartValue::Text(text) if *f == field => Some(text.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn file(&self, field: Field) -> Option<&Attachment> {
        self.parts.iter().find_map(|(f, value)| match value {
            PartValue::File(file) if *f == field => Some(file),
            _ => None,
        })
    }

    /// Builds the multipart body.
    ///
    /// # Errors
    /// When an attachment carries a content type that is not a valid MIME string.
    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        self.parts.into_iter().try_fold(Form::new(), |form, (field, value)| {
            let name: &'static str = field.into();
            Ok(match value {
                PartValue::Text(text) => form.text(name, text),
                PartValue::File(file) => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.content_type)?;
                    form.part(name, part)
                },
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seva_domain::registration::{Availability, Gender};

    fn volunteer() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new(FlowKind::Volunteer);
        draft.full_name = "  Rohan Kulkarni ".into();
        draft.gender = Some(Gender::Male);
        draft.location.set_region("Pune");
        draft.location.set_sub_region("Haveli");
        draft.tags.toggle("education");
        draft.tags.add_custom("Photography");
        draft.availability = Availability::WEEKENDS | Availability::ON_CALL;
        draft.id_document = Some(Attachment::new("aadhaar.pdf", "application/pdf", vec![7; 16]));
        draft
    }

    #[test]
    fn scalars_are_trimmed_and_blank_ones_skipped() {
        let payload = SubmissionPayload::from_draft(&volunteer()).unwrap();
        assert_eq!(payload.text(Field::FullName), Some("Rohan Kulkarni"));
        assert_eq!(payload.text(Field::Email), None);
        assert_eq!(payload.text(Field::Gender), Some("male"));
        assert_eq!(payload.text(Field::SubRegion), Some("Haveli"));
        assert_eq!(payload.text(Field::Consent), Some("false"));
    }

    #[test]
    fn lists_are_json_strings() {
        let payload = SubmissionPayload::from_draft(&volunteer()).unwrap();
        assert_eq!(payload.text(Field::Interests), Some(r#"["education","Photography"]"#));
        assert_eq!(payload.text(Field::Availability), Some(r#"["weekends","onCall"]"#));
        assert_eq!(payload.text(Field::Services), None);
    }

    #[test]
    fn files_keep_their_metadata() {
        let payload = SubmissionPayload::from_draft(&volunteer()).unwrap();
        let file = payload.file(Field::IdDocument).unwrap();
        assert_eq!(file.file_name, "aadhaar.pdf");
        assert_eq!(file.len(), 16);
        assert!(payload.file(Field::Photo).is_none());
    }

    #[test]
    fn arya_mitra_tags_go_under_services() {
        let mut draft = RegistrationDraft::new(FlowKind::AryaMitra);
        draft.tags.toggle("medical_emergency");
        let payload = SubmissionPayload::from_draft(&draft).unwrap();
        assert_eq!(payload.text(Field::Services), Some(r#"["medical_emergency"]"#));
        assert_eq!(payload.text(Field::Availability), None);
    }

    #[test]
    fn bad_mime_fails_form_building() {
        let mut draft = volunteer();
        draft.id_document = Some(Attachment::new("x", "not a mime", vec![1]));
        let payload = SubmissionPayload::from_draft(&draft).unwrap();
        assert!(payload.into_form().is_err());
    }
}
