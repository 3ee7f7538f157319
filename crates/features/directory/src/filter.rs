//! Client-side narrowing of a fetched directory.
//!
//! Criteria combine with AND. Filtering never reorders or alters entries, so applying the
//! same criteria twice gives the same result as applying them once.

use seva_domain::directory::DirectoryEntry;
use std::borrow::Borrow;

/// A dropdown value: everything, or one specific option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Choice<T> {
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl Choice<String> {
    /// `""` and `"all"` (any case) mean no restriction, which is how select inputs
    /// report their first option.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    fn admits(&self, actual: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.trim().eq_ignore_ascii_case(actual.trim()),
        }
    }

    fn admits_exactly(&self, actual: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == actual,
        }
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact tag key membership.
    pub tag: Choice<String>,
    pub region: Choice<String>,
    pub sub_region: Choice<String>,
    /// Exact postal code.
    pub postal_code: Choice<String>,
    /// Case-insensitive substring of name, organisation, region or sub-region.
    pub search: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Choice::Only(tag.into());
        self
    }

    /// Also drops the sub-region, which belonged to the previous region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.set_region(Choice::Only(region.into()));
        self
    }

    #[must_use]
    pub fn with_sub_region(mut self, sub_region: impl Into<String>) -> Self {
        self.sub_region = Choice::Only(sub_region.into());
        self
    }

    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Choice::Only(postal_code.into());
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Changes the region; a different region resets the sub-region to all.
    pub fn set_region(&mut self, region: Choice<String>) {
        if region != self.region {
            self.sub_region = Choice::All;
        }
        self.region = region;
    }

    /// Whether every criterion is "all".
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of criteria currently narrowing the list.
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.tag.is_all(),
            !self.region.is_all(),
            !self.sub_region.is_all(),
            !self.postal_code.is_all(),
            !self.search.trim().is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whether one entry passes every criterion.
#[must_use]
pub fn matches(entry: &DirectoryEntry, criteria: &FilterCriteria) -> bool {
    let tag_ok = criteria.tag.as_option().is_none_or(|tag| entry.has_tag(tag.trim()));

    tag_ok
        && criteria.region.admits(&entry.region)
        && criteria.sub_region.admits(&entry.sub_region)
        && criteria.postal_code.admits_exactly(&entry.postal_code)
        && search_matches(entry, &criteria.search)
}

fn search_matches(entry: &DirectoryEntry, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        Some(entry.name.as_str()),
        entry.organisation.as_deref(),
        Some(entry.region.as_str()),
        Some(entry.sub_region.as_str()),
    ]
    .into_iter()
    .flatten()
    .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// The entries passing `criteria`, in their original order.
///
/// Works on owned entries as well as on references, so results can be filtered again.
#[must_use]
pub fn filter<E>(entries: &[E], criteria: &FilterCriteria) -> Vec<E>
where
    E: Borrow<DirectoryEntry> + Clone,
{
    entries
        .iter()
        .filter(|entry| matches(<E as Borrow<DirectoryEntry>>::borrow(entry), criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, region: &str, sub: &str, tags: &[&str]) -> DirectoryEntry {
        DirectoryEntry {
            id: name.to_lowercase(),
            name: name.into(),
            region: region.into(),
            sub_region: sub.into(),
            postal_code: "411001".into(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..DirectoryEntry::default()
        }
    }

    #[test]
    fn choice_parse_treats_all_and_blank_alike() {
        assert_eq!(Choice::parse(""), Choice::All);
        assert_eq!(Choice::parse(" ALL "), Choice::All);
        assert_eq!(Choice::parse("Pune"), Choice::Only("Pune".to_owned()));
    }

    #[test]
    fn region_change_drops_sub_region() {
        let mut criteria = FilterCriteria::default().with_region("Pune").with_sub_region("Haveli");
        criteria.set_region(Choice::Only("Pune".into()));
        assert_eq!(criteria.sub_region, Choice::Only("Haveli".into()));

        criteria.set_region(Choice::Only("Nashik".into()));
        assert!(criteria.sub_region.is_all());
    }

    #[test]
    fn search_covers_organisation_and_places() {
        let mut e = entry("Asha", "Pune", "Haveli", &[]);
        e.organisation = Some("Seva Mandal".into());

        assert!(matches(&e, &FilterCriteria::default().with_search("mandal")));
        assert!(matches(&e, &FilterCriteria::default().with_search("HAVELI")));
        assert!(!matches(&e, &FilterCriteria::default().with_search("nashik")));
        assert!(matches(&e, &FilterCriteria::default().with_search("   ")));
    }

    #[test]
    fn postal_code_is_exact() {
        let e = entry("Asha", "Pune", "Haveli", &[]);
        assert!(matches(&e, &FilterCriteria::default().with_postal_code("411001")));
        assert!(!matches(&e, &FilterCriteria::default().with_postal_code("41100")));
        assert!(!matches(&e, &FilterCriteria::default().with_postal_code(" 411001")));

        let padded = DirectoryEntry { postal_code: "411001 ".into(), ..e };
        assert!(!matches(&padded, &FilterCriteria::default().with_postal_code("411001")));
    }

    #[test]
    fn active_count_reflects_criteria() {
        let criteria = FilterCriteria::default().with_tag("blood_donation").with_search("a");
        assert_eq!(criteria.active_count(), 2);
        assert!(FilterCriteria::default().is_unfiltered());
    }

    #[test]
    fn references_can_be_filtered_again() {
        let entries = vec![entry("A", "Pune", "Haveli", &["x"]), entry("B", "Beed", "Ashti", &["x"])];
        let refs: Vec<&DirectoryEntry> = entries.iter().collect();
        let criteria = FilterCriteria::default().with_region("pune");
        let once = filter(&refs, &criteria);
        assert_eq!(once.len(), 1);
        assert_eq!(filter(&once, &criteria), once);
    }
}
