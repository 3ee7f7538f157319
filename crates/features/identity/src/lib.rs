//! Identity slice: who is signed in.
//!
//! One [`Session`] is created when the application starts and handed to every component
//! through context. Reads are free-for-all; the only writers are [`Session::login`] and
//! [`Session::logout`].

mod error;

pub use crate::error::{IdentityError, IdentityErrorExt};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Roles the backend assigns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    #[serde(alias = "subadmin", alias = "sub_admin")]
    SubAdmin,
    Volunteer,
    #[serde(alias = "arya_mitra", alias = "aryamitra")]
    AryaMitra,
}

/// The user record returned by login and auto-login responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}

/// A signed-in user plus the bearer token the backend issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user: AuthenticatedUser,
}

/// Process-wide authentication context; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<Credentials>>>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current user.
    ///
    /// # Errors
    /// [`IdentityError::Credentials`] when the token is blank; the session is unchanged.
    pub fn login(&self, credentials: Credentials) -> Result<(), IdentityError> {
        if credentials.token.trim().is_empty() {
            return Err(IdentityError::Credentials {
                message: "Empty bearer token".into(),
                context: Some(credentials.user.id.into()),
            });
        }

        tracing::info!(user = %credentials.user.id, role = %credentials.user.role, "Signed in");
        *self.inner.write() = Some(credentials);
        Ok(())
    }

    pub fn logout(&self) {
        if let Some(previous) = self.inner.write().take() {
            tracing::info!(user = %previous.user.id, "Signed out");
        }
    }

    /// A snapshot of the signed-in user.
    #[must_use]
    pub fn current(&self) -> Option<AuthenticatedUser> {
        self.inner.read().as_ref().map(|c| c.user.clone())
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|c| c.token.clone())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.inner.read().as_ref().is_some_and(|c| c.user.role == role)
    }
}
