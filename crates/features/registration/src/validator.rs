//! Per-step validation.
//!
//! [`validate`] is pure: it reads the draft, never changes it, and is re-run on every
//! `Next` and `Submit`.

use crate::draft::RegistrationDraft;
use crate::field::Field;
use crate::flow::FlowKind;
use seva_domain::constants::{
    ACCEPTED_CONTENT_TYPES, MAX_ATTACHMENT_BYTES, MIN_AGE, MIN_MOTIVATION_CHARS,
};
use seva_domain::registration::{Attachment, IdKind};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Field → message. Empty means the step may advance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, Cow<'static, str>>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_ref()))
    }

    pub fn insert(&mut self, field: Field, message: impl Into<Cow<'static, str>>) {
        self.errors.insert(field, message.into());
    }

    /// Drops the message of one field, e.g. once the user edits it.
    pub fn remove(&mut self, field: Field) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }
}

/// Checks every field shown at 1-based `step` of the draft's flow.
///
/// A step the flow does not have has nothing to check and yields no errors.
#[must_use]
pub fn validate(step: u8, draft: &RegistrationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let Some(section) = draft.flow().section(step) else {
        return errors;
    };

    for &field in section.fields() {
        if let Some(message) = check(field, draft) {
            errors.insert(field, message);
        }
    }

    if !errors.is_empty() {
        tracing::debug!(
            flow = %draft.flow(),
            step,
            fields = ?errors.iter().map(|(f, _)| f).collect::<Vec<_>>(),
            "Step failed validation"
        );
    }
    errors
}

/// Every step at once.
#[must_use]
pub fn validate_all(draft: &RegistrationDraft) -> ValidationErrors {
    (1..=draft.flow().step_count()).fold(ValidationErrors::default(), |mut all, step| {
        all.extend(validate(step, draft));
        all
    })
}

type Message = Cow<'static, str>;

fn check(field: Field, draft: &RegistrationDraft) -> Option<Message> {
    let flow = draft.flow();
    match field {
        Field::FullName => required(&draft.full_name, "Full name is required"),
        Field::Email => required(&draft.email, "Email is required").or_else(|| email(&draft.email)),
        Field::Phone => {
            required(&draft.phone, "Mobile number is required").or_else(|| phone(&draft.phone))
        },
        Field::AlternatePhone => optional(&draft.alternate_phone).and_then(phone),
        Field::Age => required(&draft.age, "Age is required").or_else(|| age(&draft.age)),
        Field::Gender => draft.gender.is_none().then(|| "Please select a gender".into()),
        Field::Address => required(&draft.address, "Address is required"),
        Field::Region => draft.location.region().is_none().then(|| "Please select a district".into()),
        Field::SubRegion => {
            draft.location.sub_region().is_none().then(|| "Please select a taluka".into())
        },
        Field::PostalCode => required(&draft.postal_code, "Pincode is required")
            .or_else(|| postal_code(&draft.postal_code)),
        Field::IdKind => draft.id_kind.is_none().then(|| "Please select an ID type".into()),
        Field::IdNumber => required(&draft.id_number, "ID number is required")
            .or_else(|| draft.id_kind.and_then(|kind| id_number(kind, &draft.id_number))),
        Field::IdDocument => match &draft.id_document {
            None => Some("Please upload your ID document".into()),
            Some(file) => attachment(file),
        },
        Field::Photo => draft.photo.as_ref().and_then(attachment),
        Field::Interests | Field::Services => (field == flow.tag_field() && draft.tags.is_empty())
            .then(|| "Please select at least one option".into()),
        Field::Availability => (flow == FlowKind::Volunteer && draft.availability.is_empty())
            .then(|| "Please select at least one time slot".into()),
        Field::Motivation => required(&draft.motivation, "Please tell us why you want to join")
            .or_else(|| motivation(&draft.motivation)),
        Field::EmergencyName => required(&draft.emergency_name, "Emergency contact name is required"),
        Field::EmergencyPhone => required(&draft.emergency_phone, "Emergency contact number is required")
            .or_else(|| phone(&draft.emergency_phone)),
        Field::EmergencyRelation => {
            required(&draft.emergency_relation, "Relationship is required")
        },
        Field::Consent => (!draft.consent).then(|| "You must accept the terms to continue".into()),
        Field::Occupation | Field::Organisation | Field::Skills | Field::Experience => None,
    }
}

fn required(value: &str, message: &'static str) -> Option<Message> {
    value.trim().is_empty().then_some(Cow::Borrowed(message))
}

fn optional(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

/// `local@domain.tld` without whitespace.
pub(crate) fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty() && !domain.contains('@')
}

fn email(value: &str) -> Option<Message> {
    (!is_email(value)).then(|| "Please enter a valid email address".into())
}

/// Digits left after dropping spaces, dashes and a leading `+91` or `+`.
pub(crate) fn normalize_phone(value: &str) -> String {
    let compact: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = compact
        .strip_prefix("+91")
        .or_else(|| compact.strip_prefix('+'))
        .unwrap_or(&compact);
    digits.to_owned()
}

fn phone(value: &str) -> Option<Message> {
    let digits = normalize_phone(value);
    let valid = (10..=13).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit());
    (!valid).then(|| "Please enter a valid mobile number".into())
}

fn age(value: &str) -> Option<Message> {
    match value.trim().parse::<u16>() {
        Err(_) => Some("Age must be a number".into()),
        Ok(years) if years < u16::from(MIN_AGE) => {
            Some(format!("You must be at least {MIN_AGE} years old").into())
        },
        Ok(years) if years > 120 => Some("Please enter a valid age".into()),
        Ok(_) => None,
    }
}

fn motivation(value: &str) -> Option<Message> {
    (value.trim().chars().count() < MIN_MOTIVATION_CHARS).then(|| {
        format!("Please write at least {MIN_MOTIVATION_CHARS} characters").into()
    })
}

fn postal_code(value: &str) -> Option<Message> {
    let value = value.trim();
    let valid = value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit());
    (!valid).then(|| "Pincode must be exactly 6 digits".into())
}

fn id_number(kind: IdKind, value: &str) -> Option<Message> {
    let value: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    match kind {
        IdKind::Aadhaar => (value.len() != 12 || !value.bytes().all(|b| b.is_ascii_digit()))
            .then(|| "Aadhaar number must be 12 digits".into()),
        IdKind::Pan => (!is_pan(&value)).then(|| "PAN must look like ABCDE1234F".into()),
        IdKind::VoterId | IdKind::DrivingLicence | IdKind::Passport => {
            let valid = (6..=20).contains(&value.len())
                && value.bytes().all(|b| b.is_ascii_alphanumeric());
            (!valid).then(|| "ID number must be 6 to 20 letters or digits".into())
        },
    }
}

fn is_pan(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[..5].iter().all(u8::is_ascii_uppercase)
        && bytes[5..9].iter().all(u8::is_ascii_digit)
        && bytes[9].is_ascii_uppercase()
}

fn attachment(file: &Attachment) -> Option<Message> {
    if file.is_empty() {
        return Some("The selected file is empty".into());
    }
    if file.len() > MAX_ATTACHMENT_BYTES {
        return Some("File must be 5 MB or smaller".into());
    }
    let content_type = file.content_type.trim().to_ascii_lowercase();
    (!ACCEPTED_CONTENT_TYPES.contains(&content_type.as_str()))
        .then(|| "Only JPEG, PNG or PDF files are accepted".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email("asha@example.org"));
        assert!(is_email(" asha.p+seva@mail.example.co.in "));
        assert!(!is_email("asha@example"));
        assert!(!is_email("asha example@x.org"));
        assert!(!is_email("@example.org"));
        assert!(!is_email("a@b@c.org"));
        assert!(!is_email("asha@.org"));
    }

    #[test]
    fn phone_normalisation() {
        assert_eq!(normalize_phone("+91 98765-43210"), "9876543210");
        assert_eq!(normalize_phone("+1 555 123 4567"), "15551234567");
        assert!(phone("98765 43210").is_none());
        assert!(phone("12345").is_some());
        assert!(phone("98765abcde").is_some());
        assert!(phone("+91 1234567890123").is_none());
        assert!(phone("12345678901234").is_some());
    }

    #[test]
    fn age_bounds() {
        assert!(age("18").is_none());
        assert!(age(" 64 ").is_none());
        assert!(age("17").is_some());
        assert!(age("eighteen").is_some());
        assert!(age("-3").is_some());
        assert!(age("150").is_some());
    }

    #[test]
    fn postal_codes() {
        assert!(postal_code("411001").is_none());
        assert!(postal_code("41100").is_some());
        assert!(postal_code("41100a").is_some());
    }

    #[test]
    fn id_numbers_by_kind() {
        assert!(id_number(IdKind::Aadhaar, "1234 5678 9012").is_none());
        assert!(id_number(IdKind::Aadhaar, "12345678901").is_some());
        assert!(id_number(IdKind::Pan, "ABCDE1234F").is_none());
        assert!(id_number(IdKind::Pan, "abcde1234f").is_some());
        assert!(id_number(IdKind::Pan, "ABCD12345F").is_some());
        assert!(id_number(IdKind::Passport, "K1234567").is_none());
        assert!(id_number(IdKind::VoterId, "AB-12").is_some());
    }

    #[test]
    fn attachment_limits() {
        let ok = Attachment::new("id.pdf", "application/pdf", vec![0; 1024]);
        assert!(attachment(&ok).is_none());

        let big = Attachment::new("id.png", "image/png", vec![0; MAX_ATTACHMENT_BYTES + 1]);
        assert!(attachment(&big).is_some());

        let exact = Attachment::new("id.png", "IMAGE/PNG", vec![0; MAX_ATTACHMENT_BYTES]);
        assert!(attachment(&exact).is_none());

        let gif = Attachment::new("id.gif", "image/gif", vec![0; 10]);
        assert!(attachment(&gif).is_some());

        let empty = Attachment::new("id.pdf", "application/pdf", Vec::new());
        assert!(attachment(&empty).is_some());
    }

    #[test]
    fn motivation_length_counts_characters() {
        assert!(motivation(&"a".repeat(29)).is_some());
        assert!(motivation(&"स".repeat(30)).is_none());
    }
}
