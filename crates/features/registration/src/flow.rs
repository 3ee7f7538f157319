use crate::field::Field;
use seva_domain::catalog::{EMERGENCY_SERVICES, TagCatalog, VOLUNTEER_INTERESTS};
use seva_domain::constants::{
    ARYA_MITRA_REGISTER_PATH, ARYA_MITRA_RESOURCE, VOLUNTEER_REGISTER_PATH, VOLUNTEERS_RESOURCE,
};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// The two registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum FlowKind {
    Volunteer,
    AryaMitra,
}

/// One page of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    PersonalInfo,
    IdVerification,
    Preferences,
    Motivation,
    EmergencyContact,
    Services,
    Verification,
}

const VOLUNTEER_SECTIONS: &[Section] = &[
    Section::PersonalInfo,
    Section::IdVerification,
    Section::Preferences,
    Section::Motivation,
    Section::EmergencyContact,
];

const ARYA_MITRA_SECTIONS: &[Section] =
    &[Section::PersonalInfo, Section::Services, Section::Verification];

impl FlowKind {
    /// Sections in step order; step `n` is `sections()[n - 1]`.
    #[must_use]
    pub const fn sections(self) -> &'static [Section] {
        match self {
            Self::Volunteer => VOLUNTEER_SECTIONS,
            Self::AryaMitra => ARYA_MITRA_SECTIONS,
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn step_count(self) -> u8 {
        self.sections().len() as u8
    }

    /// The section shown at 1-based `step`.
    #[must_use]
    pub fn section(self, step: u8) -> Option<Section> {
        usize::from(step).checked_sub(1).and_then(|i| self.sections().get(i).copied())
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteer Registration",
            Self::AryaMitra => "SN Arya Mitra Registration",
        }
    }

    /// The tags this form offers.
    #[must_use]
    pub const fn tag_catalog(self) -> &'static TagCatalog {
        match self {
            Self::Volunteer => &VOLUNTEER_INTERESTS,
            Self::AryaMitra => &EMERGENCY_SERVICES,
        }
    }

    /// The field the selected tags are submitted under.
    #[must_use]
    pub const fn tag_field(self) -> Field {
        match self {
            Self::Volunteer => Field::Interests,
            Self::AryaMitra => Field::Services,
        }
    }

    /// Submission endpoint, relative to the API base.
    #[must_use]
    pub const fn register_path(self) -> &'static str {
        match self {
            Self::Volunteer => VOLUNTEER_REGISTER_PATH,
            Self::AryaMitra => ARYA_MITRA_REGISTER_PATH,
        }
    }

    /// Envelope key of the matching directory collection.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Volunteer => VOLUNTEERS_RESOURCE,
            Self::AryaMitra => ARYA_MITRA_RESOURCE,
        }
    }
}

impl Section {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Information",
            Self::IdVerification => "ID Verification",
            Self::Preferences => "Preferences",
            Self::Motivation => "Motivation",
            Self::EmergencyContact => "Emergency Contact",
            Self::Services => "Services",
            Self::Verification => "Verification",
        }
    }

    /// Inputs on this page, in display order.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::PersonalInfo => &[
                Field::FullName,
                Field::Email,
                Field::Phone,
                Field::AlternatePhone,
                Field::Age,
                Field::Gender,
                Field::Occupation,
                Field::Organisation,
                Field::Address,
                Field::Region,
                Field::SubRegion,
                Field::PostalCode,
            ],
            Self::IdVerification => {
                &[Field::IdKind, Field::IdNumber, Field::IdDocument, Field::Photo]
            },
            Self::Preferences => &[Field::Interests, Field::Availability, Field::Skills],
            Self::Motivation => &[Field::Motivation, Field::Experience],
            Self::EmergencyContact => &[
                Field::EmergencyName,
                Field::EmergencyPhone,
                Field::EmergencyRelation,
                Field::Consent,
            ],
            Self::Services => &[Field::Services, Field::Availability],
            Self::Verification => {
                &[Field::IdKind, Field::IdNumber, Field::IdDocument, Field::Photo, Field::Consent]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_counts_match_forms() {
        assert_eq!(FlowKind::Volunteer.step_count(), 5);
        assert_eq!(FlowKind::AryaMitra.step_count(), 3);
    }

    #[test]
    fn steps_are_one_based() {
        assert_eq!(FlowKind::Volunteer.section(0), None);
        assert_eq!(FlowKind::Volunteer.section(1), Some(Section::PersonalInfo));
        assert_eq!(FlowKind::Volunteer.section(5), Some(Section::EmergencyContact));
        assert_eq!(FlowKind::AryaMitra.section(3), Some(Section::Verification));
        assert_eq!(FlowKind::AryaMitra.section(4), None);
    }

    #[test]
    fn consent_is_on_the_last_page() {
        for flow in [FlowKind::Volunteer, FlowKind::AryaMitra] {
            let last = flow.section(flow.step_count()).unwrap();
            assert!(last.fields().contains(&Field::Consent), "{flow}");
        }
    }

    #[test]
    fn tag_field_lives_in_the_flow() {
        for flow in [FlowKind::Volunteer, FlowKind::AryaMitra] {
            let field = flow.tag_field();
            assert!(flow.sections().iter().any(|s| s.fields().contains(&field)));
        }
    }
}
