//! Wire names shared by the client crates and the development backend.

/// Collection key of the volunteer directory in the response envelope.
pub const VOLUNTEERS_RESOURCE: &str = "volunteers";
/// Collection key of the SN Arya Mitra directory in the response envelope.
pub const ARYA_MITRA_RESOURCE: &str = "aryaMitras";
pub const STATS_RESOURCE: &str = "stats";

pub const HEALTH_PATH: &str = "health";
pub const VOLUNTEERS_PATH: &str = "volunteers";
pub const ARYA_MITRA_PATH: &str = "arya-mitra";
pub const STATS_PATH: &str = "stats";
pub const VOLUNTEER_REGISTER_PATH: &str = "volunteers/register";
pub const ARYA_MITRA_REGISTER_PATH: &str = "arya-mitra/register";

/// Fixed key of the statistics fallback copy.
pub const IMPACT_STATS_KEY: &str = "impactStats";

/// Largest attachment accepted by the forms.
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "application/pdf"];

pub const MIN_AGE: u8 = 18;
pub const MIN_MOTIVATION_CHARS: usize = 30;

/// Message shown when a failed response carries none of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";
