//! # Domain Models
//!
//! Pure types shared by every Seva crate, plus the bundled reference data (district and
//! taluka catalog, service and interest tags). Dependencies are limited to `serde` and
//! `bitflags`: no I/O, networking or heavy logic belongs here.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod directory;
pub mod icons;
pub mod registration;
pub mod stats;
