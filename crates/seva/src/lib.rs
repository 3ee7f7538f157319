//! Facade crate for the Seva feature slices and shared modules.
//! Re-exports domain/kernel primitives and the registration, directory and identity slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Depend on `seva` instead of the individual slices.
//! - Check [`features::ENABLED`] to see what a build carries.

pub use seva_domain as domain;
pub use seva_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use seva_directory as directory;
    pub use seva_identity as identity;
    pub use seva_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
        "registration",
        "directory",
        "identity",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
