use chrono::{DateTime, Utc};
use seva_domain::directory::DirectoryEntry;
use std::borrow::Borrow;
use std::cmp::Ordering;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// How a directory grid is ordered. All orders are stable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    /// Backend order, untouched.
    #[default]
    AsFetched,
    NameAscending,
    NameDescending,
    /// Entries without a readable timestamp go last.
    NewestFirst,
}

impl SortOrder {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AsFetched => "Default",
            Self::NameAscending => "Name (A–Z)",
            Self::NameDescending => "Name (Z–A)",
            Self::NewestFirst => "Newest first",
        }
    }

    pub fn sort<E: Borrow<DirectoryEntry>>(self, entries: &mut [E]) {
        match self {
            Self::AsFetched => {},
            Self::NameAscending => entries.sort_by(|a, b| by_name(a.borrow(), b.borrow())),
            Self::NameDescending => {
                entries.sort_by(|a, b| by_name(b.borrow(), a.borrow()));
            },
            Self::NewestFirst => {
                entries.sort_by_cached_key(|e| std::cmp::Reverse(registered_at(e.borrow())));
            },
        }
    }
}

fn by_name(a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
    a.name.trim().to_lowercase().cmp(&b.name.trim().to_lowercase())
}

fn registered_at(entry: &DirectoryEntry) -> Option<DateTime<Utc>> {
    entry
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw.trim()).ok())
        .map(|at| at.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, created_at: Option<&str>) -> DirectoryEntry {
        DirectoryEntry {
            name: name.into(),
            created_at: created_at.map(str::to_owned),
            ..DirectoryEntry::default()
        }
    }

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn name_orders_ignore_case() {
        let mut entries = vec![named("meera", None), named("Anil", None), named("Zoya", None)];
        SortOrder::NameAscending.sort(&mut entries);
        assert_eq!(names(&entries), ["Anil", "meera", "Zoya"]);

        SortOrder::NameDescending.sort(&mut entries);
        assert_eq!(names(&entries), ["Zoya", "meera", "Anil"]);
    }

    #[test]
    fn newest_first_puts_unknown_dates_last_and_keeps_ties() {
        let mut entries = vec![
            named("undated-1", None),
            named("old", Some("2024-01-05T10:00:00Z")),
            named("new", Some("2025-03-01T08:30:00+05:30")),
            named("garbled", Some("yesterday")),
            named("old-twin", Some("2024-01-05T10:00:00Z")),
        ];
        SortOrder::NewestFirst.sort(&mut entries);
        assert_eq!(names(&entries), ["new", "old", "old-twin", "undated-1", "garbled"]);
    }

    #[test]
    fn as_fetched_is_a_no_op() {
        let mut entries = vec![named("b", None), named("a", None)];
        SortOrder::AsFetched.sort(&mut entries);
        assert_eq!(names(&entries), ["b", "a"]);
    }
}
