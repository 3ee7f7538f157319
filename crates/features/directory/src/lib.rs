//! # Directory
//!
//! Volunteer and SN Arya Mitra listings as the public pages show them: fetched once,
//! then narrowed and ordered on the client.
//!
//! ```rust
//! use seva_directory::{DirectoryView, FilterCriteria, LoadState, Listing};
//!
//! let mut view = DirectoryView::new();
//! assert_eq!(view.state(), LoadState::Loading);
//!
//! view.set_listing(Listing::Loaded(Vec::new()));
//! assert_eq!(view.state(), LoadState::Empty);
//!
//! view.criteria = FilterCriteria::default().with_region("Pune");
//! assert!(view.visible().is_empty());
//! ```

mod error;
pub mod filter;
pub mod listing;
pub mod sort;
pub mod stats;

pub use crate::error::{DirectoryError, DirectoryErrorExt};
pub use crate::filter::{Choice, FilterCriteria, filter, matches};
pub use crate::listing::{DirectoryClient, DirectoryKind, DirectoryView, Listing, LoadState};
pub use crate::sort::SortOrder;
pub use crate::stats::{StatsCache, StatsSource, fetch_stats};
