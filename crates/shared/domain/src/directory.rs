use serde::{Deserialize, Deserializer, Serialize};

/// A registered contact as served by the directory endpoints.
///
/// The backend has used several spellings over time, so the common aliases are
/// accepted on input; output is always camelCase. Text fields also accept numbers and
/// `null`, and a `null` tag list reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryEntry {
    #[serde(alias = "_id", deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(alias = "fullName", deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(alias = "organization", skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    #[serde(alias = "district", deserialize_with = "lenient_text")]
    pub region: String,
    #[serde(alias = "taluka", deserialize_with = "lenient_text")]
    pub sub_region: String,
    #[serde(alias = "pincode", deserialize_with = "lenient_text")]
    pub postal_code: String,
    #[serde(alias = "services", alias = "interests", deserialize_with = "lenient_list")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// RFC 3339 timestamp of the registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl DirectoryEntry {
    #[must_use]
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag == key)
    }

    /// `"Haveli, Pune"`, or whichever half is known.
    #[must_use]
    pub fn display_region(&self) -> String {
        match (self.sub_region.trim(), self.region.trim()) {
            ("", region) => region.to_owned(),
            (sub, "") => sub.to_owned(),
            (sub, region) => format!("{sub}, {region}"),
        }
    }
}

/// A string, a number (pincodes are often stored as integers) or `null`.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Plain(String),
        Whole(u64),
        Real(f64),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        None => String::new(),
        Some(Text::Plain(text)) => text,
        Some(Text::Whole(number)) => number.to_string(),
        Some(Text::Real(number)) => number.to_string(),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
