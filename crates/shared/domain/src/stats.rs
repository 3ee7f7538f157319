use serde::{Deserialize, Serialize};

/// Headline numbers shown on the landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactStats {
    pub donors: u64,
    pub volunteers: u64,
    pub campaigns: u64,
    pub beneficiaries: u64,
    /// Whole rupees.
    pub funds_raised: u64,
}
