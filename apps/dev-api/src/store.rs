//! In-memory collections behind the development backend.

use crate::error::DevApiError;
use parking_lot::RwLock;
use seva::domain::directory::DirectoryEntry;
use seva::domain::stats::ImpactStats;
use seva::features::directory::DirectoryKind;
use seva::kernel::safe_nanoid;

#[derive(Debug, Default)]
struct Collections {
    volunteers: Vec<DirectoryEntry>,
    arya_mitras: Vec<DirectoryEntry>,
    stats: ImpactStats,
}

impl Collections {
    const fn of(&self, kind: DirectoryKind) -> &Vec<DirectoryEntry> {
        match kind {
            DirectoryKind::Volunteers => &self.volunteers,
            DirectoryKind::AryaMitras => &self.arya_mitras,
        }
    }

    const fn of_mut(&mut self, kind: DirectoryKind) -> &mut Vec<DirectoryEntry> {
        match kind {
            DirectoryKind::Volunteers => &mut self.volunteers,
            DirectoryKind::AryaMitras => &mut self.arya_mitras,
        }
    }
}

/// Registered people and headline numbers; clones of [`crate::AppState`] share one store.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Collections>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with a handful of people across several districts.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self {
            inner: RwLock::new(Collections {
                stats: ImpactStats {
                    donors: 1_240,
                    volunteers: 0,
                    campaigns: 38,
                    beneficiaries: 15_600,
                    funds_raised: 4_850_000,
                },
                ..Collections::default()
            }),
        };

        for (name, region, sub_region, postal_code, tags, created_at) in SEED_VOLUNTEERS {
            store.seed(DirectoryKind::Volunteers, name, region, sub_region, postal_code, tags, created_at);
        }
        for (name, region, sub_region, postal_code, tags, created_at) in SEED_ARYA_MITRAS {
            store.seed(DirectoryKind::AryaMitras, name, region, sub_region, postal_code, tags, created_at);
        }
        store
    }

    fn seed(
        &self,
        kind: DirectoryKind,
        name: &str,
        region: &str,
        sub_region: &str,
        postal_code: &str,
        tags: &[&str],
        created_at: &str,
    ) {
        let entry = DirectoryEntry {
            id: safe_nanoid!(),
            name: name.to_owned(),
            region: region.to_owned(),
            sub_region: sub_region.to_owned(),
            postal_code: postal_code.to_owned(),
            tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
            created_at: Some(created_at.to_owned()),
            ..DirectoryEntry::default()
        };
        if let Err(err) = self.insert(kind, entry) {
            tracing::warn!(%kind, name, error = %err, "Seed entry rejected");
        }
    }

    /// Snapshot of one collection in insertion order.
    #[must_use]
    pub fn list(&self, kind: DirectoryKind) -> Vec<DirectoryEntry> {
        self.inner.read().of(kind).clone()
    }

    #[must_use]
    pub fn stats(&self) -> ImpactStats {
        self.inner.read().stats
    }

    /// Appends `entry`, refusing an email already registered in the same collection.
    ///
    /// # Errors
    /// [`DevApiError::Conflict`] with the message the clients show verbatim.
    pub fn insert(&self, kind: DirectoryKind, entry: DirectoryEntry) -> Result<(), DevApiError> {
        let mut collections = self.inner.write();
        if let Some(email) = entry.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
            let taken = collections.of(kind).iter().any(|existing| {
                existing.email.as_deref().is_some_and(|e| e.trim().eq_ignore_ascii_case(email))
            });
            if taken {
                return Err(DevApiError::Conflict {
                    message: "Email already registered".into(),
                    context: Some(kind.to_string().into()),
                });
            }
        }

        collections.of_mut(kind).push(entry);
        if kind == DirectoryKind::Volunteers {
            collections.stats.volunteers += 1;
        }
        Ok(())
    }
}

type Seed = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str], &'static str);

const SEED_VOLUNTEERS: [Seed; 5] = [
    ("Rohan Kulkarni", "Pune", "Haveli", "412110", &["education", "event_management"], "2024-01-14T09:30:00Z"),
    ("Sneha Deshmukh", "Nashik", "Sinnar", "422103", &["healthcare"], "2024-02-02T11:00:00Z"),
    ("Amit Pawar", "Satara", "Karad", "415110", &["environment", "disaster_relief"], "2024-03-21T16:45:00Z"),
    ("Kavita More", "Thane", "Kalyan", "421301", &["women_empowerment", "social_media"], "2024-04-08T08:15:00Z"),
    ("Vikram Joshi", "Nagpur", "Hingna", "441110", &["fundraising"], "2024-05-19T13:20:00Z"),
];

const SEED_ARYA_MITRAS: [Seed; 6] = [
    ("Ravi Patil", "Jalna", "Partur", "431501", &["medical_emergency", "blood_donation"], "2024-01-05T10:00:00Z"),
    ("Meera Shinde", "Jalna", "Ambad", "431204", &["medical_emergency", "elder_care"], "2024-02-11T12:30:00Z"),
    ("Suresh Gaikwad", "Beed", "Georai", "431127", &["food_distribution"], "2024-02-27T07:50:00Z"),
    ("Anjali Wagh", "Pune", "Mulshi", "412108", &["ambulance_support", "hospital_guidance"], "2024-03-30T18:10:00Z"),
    ("Prakash Jadhav", "Chhatrapati Sambhajinagar", "Paithan", "431107", &["disaster_relief"], "2024-04-22T06:40:00Z"),
    ("Lata Bhosale", "Jalna", "Jalna", "431203", &["counselling", "medical_emergency"], "2024-06-01T15:05:00Z"),
];
