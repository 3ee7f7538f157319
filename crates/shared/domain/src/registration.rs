use bitflags::bitflags;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Time slots a volunteer can commit to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Availability: u8 {
        const WEEKDAY_MORNINGS = 1 << 0;
        const WEEKDAY_EVENINGS = 1 << 1;
        const WEEKENDS = 1 << 2;
        const ON_CALL = 1 << 3;
    }
}

impl Availability {
    const WIRE: [(Self, &'static str, &'static str); 4] = [
        (Self::WEEKDAY_MORNINGS, "weekdayMornings", "Weekday mornings"),
        (Self::WEEKDAY_EVENINGS, "weekdayEvenings", "Weekday evenings"),
        (Self::WEEKENDS, "weekends", "Weekends"),
        (Self::ON_CALL, "onCall", "On call for emergencies"),
    ];

    /// Every single slot with its wire name and label, in display order.
    pub fn slots() -> impl Iterator<Item = (Self, &'static str, &'static str)> {
        Self::WIRE.into_iter()
    }

    /// Wire names of the selected slots, in display order.
    pub fn wire_names(self) -> impl Iterator<Item = &'static str> {
        Self::WIRE.into_iter().filter(move |(flag, ..)| self.contains(*flag)).map(|(_, name, _)| name)
    }
}

impl From<&str> for Availability {
    fn from(s: &str) -> Self {
        Self::WIRE
            .into_iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map_or_else(Self::empty, |(flag, ..)| flag)
    }
}

impl Serialize for Availability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.iter().count()))?;
        for name in self.wire_names() {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().fold(Self::empty(), |acc, name| acc | Self::from(name.as_str())))
    }
}

/// Identity document offered for verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdKind {
    Aadhaar,
    Pan,
    VoterId,
    DrivingLicence,
    Passport,
}

impl IdKind {
    pub const ALL: [Self; 5] =
        [Self::Aadhaar, Self::Pan, Self::VoterId, Self::DrivingLicence, Self::Passport];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::VoterId => "voterId",
            Self::DrivingLicence => "drivingLicence",
            Self::Passport => "passport",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar Card",
            Self::Pan => "PAN Card",
            Self::VoterId => "Voter ID",
            Self::DrivingLicence => "Driving Licence",
            Self::Passport => "Passport",
        }
    }

    /// Parses the wire name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Self; 4] = [Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "preferNotToSay",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// A file picked by the user, held in memory until submission.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self { file_name: file_name.into(), content_type: content_type.into(), bytes }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
