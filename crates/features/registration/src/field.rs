use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Every input either registration form can show.
///
/// The string form is the multipart part name and the key used in
/// [`crate::ValidationErrors`], e.g. `Field::FullName` ↔ `fullName`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    AlternatePhone,
    Age,
    Gender,
    Occupation,
    Organisation,
    Address,
    Region,
    SubRegion,
    PostalCode,
    IdKind,
    IdNumber,
    IdDocument,
    Photo,
    Interests,
    Services,
    Availability,
    Skills,
    Motivation,
    Experience,
    EmergencyName,
    EmergencyPhone,
    EmergencyRelation,
    Consent,
}

impl Field {
    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Phone => "Mobile number",
            Self::AlternatePhone => "Alternate number",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Occupation => "Occupation",
            Self::Organisation => "Organisation",
            Self::Address => "Address",
            Self::Region => "District",
            Self::SubRegion => "Taluka",
            Self::PostalCode => "Pincode",
            Self::IdKind => "ID type",
            Self::IdNumber => "ID number",
            Self::IdDocument => "ID document",
            Self::Photo => "Photograph",
            Self::Interests => "Areas of interest",
            Self::Services => "Services offered",
            Self::Availability => "Availability",
            Self::Skills => "Skills",
            Self::Motivation => "Why do you want to volunteer?",
            Self::Experience => "Previous experience",
            Self::EmergencyName => "Emergency contact name",
            Self::EmergencyPhone => "Emergency contact number",
            Self::EmergencyRelation => "Relationship",
            Self::Consent => "Consent",
        }
    }

    /// Whether the input holds a file rather than text.
    #[must_use]
    pub const fn is_file(self) -> bool {
        matches!(self, Self::IdDocument | Self::Photo)
    }

    /// Whether the draft stores this field as a plain string.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Self::FullName
                | Self::Email
                | Self::Phone
                | Self::AlternatePhone
                | Self::Age
                | Self::Occupation
                | Self::Organisation
                | Self::Address
                | Self::PostalCode
                | Self::IdNumber
                | Self::Skills
                | Self::Motivation
                | Self::Experience
                | Self::EmergencyName
                | Self::EmergencyPhone
                | Self::EmergencyRelation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_names_are_camel_case() {
        assert_eq!(Field::FullName.as_ref(), "fullName");
        assert_eq!(Field::PostalCode.to_string(), "postalCode");
        assert_eq!(Field::from_str("subRegion").unwrap(), Field::SubRegion);
    }

    #[test]
    fn text_and_file_fields_do_not_overlap() {
        assert!(Field::iter().all(|f| !(f.is_text() && f.is_file())));
    }
}
