use crate::filter::{FilterCriteria, filter};
use crate::sort::SortOrder;
use seva_domain::catalog::{EMERGENCY_SERVICES, TagCatalog, VOLUNTEER_INTERESTS};
use seva_domain::constants::{
    ARYA_MITRA_PATH, ARYA_MITRA_RESOURCE, VOLUNTEERS_PATH, VOLUNTEERS_RESOURCE,
};
use seva_domain::directory::DirectoryEntry;
use seva_kernel::api::ApiClient;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter};
use tracing::{info, warn};

/// Which directory to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DirectoryKind {
    #[strum(to_string = "Volunteers")]
    Volunteers,
    #[strum(to_string = "SN Arya Mitras")]
    AryaMitras,
}

impl DirectoryKind {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Volunteers => VOLUNTEERS_PATH,
            Self::AryaMitras => ARYA_MITRA_PATH,
        }
    }

    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Volunteers => VOLUNTEERS_RESOURCE,
            Self::AryaMitras => ARYA_MITRA_RESOURCE,
        }
    }

    #[must_use]
    pub const fn tag_catalog(self) -> &'static TagCatalog {
        match self {
            Self::Volunteers => &VOLUNTEER_INTERESTS,
            Self::AryaMitras => &EMERGENCY_SERVICES,
        }
    }
}

/// Outcome of one fetch. There is no third "sample data" case: a failed fetch says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Loaded(Vec<DirectoryEntry>),
    /// Message suitable for display.
    Unavailable(String),
}

/// Fetches directory collections.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: ApiClient,
}

impl DirectoryClient {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One `GET`; every failure becomes [`Listing::Unavailable`].
    ///
    /// Entries are decoded one by one, so a malformed record is skipped rather than
    /// hiding the whole collection.
    pub async fn fetch(&self, kind: DirectoryKind) -> Listing {
        let result = async {
            let envelope = self.client.get(kind.path()).await?.into_result()?;
            envelope.decode::<Vec<Value>>(kind.resource())
        }
        .await
        .map(|raw| decode_entries(kind, raw));

        match result {
            Ok(entries) => {
                info!(%kind, count = entries.len(), "Directory loaded");
                Listing::Loaded(entries)
            },
            Err(err) => {
                warn!(%kind, error = %err, "Directory unavailable");
                let message = err.backend_message().map_or_else(
                    || format!("{kind} could not be loaded. Please try again later."),
                    str::to_owned,
                );
                Listing::Unavailable(message)
            },
        }
    }
}

fn decode_entries(kind: DirectoryKind, raw: Vec<Value>) -> Vec<DirectoryEntry> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match DirectoryEntry::deserialize(value) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(%kind, index, error = %err, "Skipping malformed directory entry");
                None
            },
        })
        .collect()
}

/// What a directory page should draw right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<'a> {
    Loading,
    Unavailable(&'a str),
    /// Loaded, but the backend returned nothing.
    Empty,
    /// Loaded, but the criteria exclude every entry.
    NoMatches,
    Entries(Vec<&'a DirectoryEntry>),
}

/// Fetched entries plus the user's filter and sort choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryView {
    listing: Option<Listing>,
    pub criteria: FilterCriteria,
    pub order: SortOrder,
}

impl DirectoryView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fetch result; criteria and order survive reloads.
    pub fn set_listing(&mut self, listing: Listing) {
        self.listing = Some(listing);
    }

    /// Forgets the current result, e.g. before a refetch.
    pub fn mark_loading(&mut self) {
        self.listing = None;
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.listing, Some(Listing::Loaded(_)))
    }

    /// All fetched entries, unfiltered.
    #[must_use]
    pub fn entries(&self) -> &[DirectoryEntry] {
        match &self.listing {
            Some(Listing::Loaded(entries)) => entries,
            _ => &[],
        }
    }

    /// Filtered, then sorted.
    #[must_use]
    pub fn visible(&self) -> Vec<&DirectoryEntry> {
        let refs: Vec<&DirectoryEntry> = self.entries().iter().collect();
        let mut shown = filter(&refs, &self.criteria);
        self.order.sort(&mut shown);
        shown
    }

    #[must_use]
    pub fn state(&self) -> LoadState<'_> {
        match &self.listing {
            None => LoadState::Loading,
            Some(Listing::Unavailable(message)) => LoadState::Unavailable(message),
            Some(Listing::Loaded(entries)) if entries.is_empty() => LoadState::Empty,
            Some(Listing::Loaded(_)) => {
                let shown = self.visible();
                if shown.is_empty() { LoadState::NoMatches } else { LoadState::Entries(shown) }
            },
        }
    }

    /// Regions present in the data, sorted, for the region dropdown.
    #[must_use]
    pub fn region_options(&self) -> Vec<&str> {
        distinct(self.entries().iter().map(|e| e.region.trim()))
    }

    /// Sub-regions present under the selected region; empty while the region is "all".
    #[must_use]
    pub fn sub_region_options(&self) -> Vec<&str> {
        let Some(region) = self.criteria.region.as_option() else {
            return Vec::new();
        };
        distinct(
            self.entries()
                .iter()
                .filter(|e| e.region.trim().eq_ignore_ascii_case(region.trim()))
                .map(|e| e.sub_region.trim()),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.filter(|v| !v.is_empty()).collect::<BTreeSet<_>>().into_iter().collect()
}
