//! Bundled reference data: the district → taluka hierarchy and the tag catalogs.
//!
//! Everything here is `'static` and immutable, so any number of forms and directory
//! views can share it without coordination.

/// A region (district) with its ordered sub-regions (talukas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub sub_regions: &'static [&'static str],
}

/// Immutable region → sub-region mapping.
///
/// Every sub-region appears under exactly one region.
#[derive(Debug, Clone, Copy)]
pub struct RegionCatalog {
    regions: &'static [Region],
}

impl RegionCatalog {
    #[must_use]
    pub const fn new(regions: &'static [Region]) -> Self {
        Self { regions }
    }

    /// Region names in catalog order.
    pub fn regions(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.regions.iter().map(|region| region.name)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.regions.len()
    }

    /// Looks a region up by name, ignoring ASCII case.
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&'static Region> {
        let name = name.trim();
        self.regions.iter().find(|region| region.name.eq_ignore_ascii_case(name))
    }

    /// The canonical spelling of `name`, if it is a known region.
    #[must_use]
    pub fn resolve_region(&self, name: &str) -> Option<&'static str> {
        self.region(name).map(|region| region.name)
    }

    /// Sub-regions of `region`; empty for unknown regions.
    #[must_use]
    pub fn sub_regions(&self, region: &str) -> &'static [&'static str] {
        self.region(region).map_or(&[], |region| region.sub_regions)
    }

    /// The canonical spelling of `sub_region` if it is listed under `region`.
    #[must_use]
    pub fn resolve_sub_region(&self, region: &str, sub_region: &str) -> Option<&'static str> {
        let sub_region = sub_region.trim();
        self.sub_regions(region).iter().copied().find(|s| s.eq_ignore_ascii_case(sub_region))
    }

    #[must_use]
    pub fn contains(&self, region: &str, sub_region: &str) -> bool {
        self.resolve_sub_region(region, sub_region).is_some()
    }

    /// The region a sub-region belongs to.
    #[must_use]
    pub fn region_of(&self, sub_region: &str) -> Option<&'static str> {
        let sub_region = sub_region.trim();
        self.regions
            .iter()
            .find(|region| region.sub_regions.iter().any(|s| s.eq_ignore_ascii_case(sub_region)))
            .map(|region| region.name)
    }
}

/// A selectable service or interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Wire key, e.g. `medical_emergency`.
    pub key: &'static str,
    /// Human readable label.
    pub label: &'static str,
    /// Icon name, resolved through [`crate::icons::IconKey`].
    pub icon: &'static str,
}

/// Immutable list of tags offered by a form.
#[derive(Debug, Clone, Copy)]
pub struct TagCatalog {
    tags: &'static [Tag],
}

impl TagCatalog {
    #[must_use]
    pub const fn new(tags: &'static [Tag]) -> Self {
        Self { tags }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Tag> + use<> {
        self.tags.iter()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static Tag> {
        self.tags.iter().find(|tag| tag.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The label of a catalog key, or the key itself for custom tags.
    #[must_use]
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        self.get(key).map_or(key, |tag| tag.label)
    }
}

/// Districts of Maharashtra served by the trust and their talukas.
pub static MAHARASHTRA: RegionCatalog = RegionCatalog::new(&[
    Region {
        name: "Pune",
        sub_regions: &[
            "Haveli",
            "Pune City",
            "Mulshi",
            "Maval",
            "Bhor",
            "Velhe",
            "Purandar",
            "Baramati",
            "Indapur",
            "Daund",
            "Shirur",
            "Khed",
            "Ambegaon",
            "Junnar",
        ],
    },
    Region {
        name: "Nashik",
        sub_regions: &[
            "Nashik",
            "Igatpuri",
            "Trimbakeshwar",
            "Dindori",
            "Niphad",
            "Sinnar",
            "Yeola",
            "Malegaon",
            "Chandwad",
            "Satana",
        ],
    },
    Region {
        name: "Jalna",
        sub_regions: &[
            "Jalna",
            "Ambad",
            "Badnapur",
            "Bhokardan",
            "Ghansawangi",
            "Jafrabad",
            "Mantha",
            "Partur",
        ],
    },
    Region {
        name: "Chhatrapati Sambhajinagar",
        sub_regions: &[
            "Sambhajinagar",
            "Paithan",
            "Gangapur",
            "Vaijapur",
            "Kannad",
            "Khuldabad",
            "Sillod",
            "Soegaon",
            "Phulambri",
        ],
    },
    Region {
        name: "Beed",
        sub_regions: &["Beed", "Ashti", "Georai", "Kaij", "Majalgaon", "Parli", "Patoda", "Wadwani"],
    },
    Region {
        name: "Thane",
        sub_regions: &["Thane", "Kalyan", "Bhiwandi", "Shahapur", "Murbad", "Ulhasnagar", "Ambarnath"],
    },
    Region {
        name: "Mumbai Suburban",
        sub_regions: &["Andheri", "Borivali", "Kurla"],
    },
    Region {
        name: "Nagpur",
        sub_regions: &[
            "Nagpur Urban",
            "Nagpur Rural",
            "Kamptee",
            "Hingna",
            "Katol",
            "Umred",
            "Ramtek",
        ],
    },
    Region {
        name: "Satara",
        sub_regions: &["Satara", "Karad", "Wai", "Koregaon", "Phaltan", "Mahabaleshwar", "Patan"],
    },
]);

/// Services an SN Arya Mitra can offer in an emergency.
pub static EMERGENCY_SERVICES: TagCatalog = TagCatalog::new(&[
    Tag { key: "medical_emergency", label: "Medical Emergency", icon: "heart-pulse" },
    Tag { key: "blood_donation", label: "Blood Donation", icon: "droplet" },
    Tag { key: "ambulance_support", label: "Ambulance Support", icon: "ambulance" },
    Tag { key: "hospital_guidance", label: "Hospital Guidance", icon: "hospital" },
    Tag { key: "food_distribution", label: "Food Distribution", icon: "utensils" },
    Tag { key: "disaster_relief", label: "Disaster Relief", icon: "life-buoy" },
    Tag { key: "elder_care", label: "Elder Care", icon: "hand-heart" },
    Tag { key: "counselling", label: "Counselling", icon: "message-circle" },
]);

/// Areas a volunteer can help with.
pub static VOLUNTEER_INTERESTS: TagCatalog = TagCatalog::new(&[
    Tag { key: "education", label: "Education & Tutoring", icon: "book-open" },
    Tag { key: "healthcare", label: "Health Camps", icon: "stethoscope" },
    Tag { key: "environment", label: "Environment", icon: "leaf" },
    Tag { key: "women_empowerment", label: "Women Empowerment", icon: "users" },
    Tag { key: "event_management", label: "Event Management", icon: "calendar" },
    Tag { key: "fundraising", label: "Fundraising", icon: "hand-coins" },
    Tag { key: "social_media", label: "Social Media & Outreach", icon: "megaphone" },
    Tag { key: "disaster_relief", label: "Disaster Relief", icon: "life-buoy" },
]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_sub_region_belongs_to_exactly_one_region() {
        let mut seen = HashSet::new();
        for region in MAHARASHTRA.regions {
            for sub in region.sub_regions {
                assert!(seen.insert(sub.to_ascii_lowercase()), "duplicate sub-region {sub}");
            }
        }
    }

    #[test]
    fn lookups_are_case_insensitive_and_canonical() {
        assert_eq!(MAHARASHTRA.resolve_region("pune"), Some("Pune"));
        assert_eq!(MAHARASHTRA.resolve_sub_region("PUNE", "haveli"), Some("Haveli"));
        assert_eq!(MAHARASHTRA.region_of("Partur"), Some("Jalna"));
        assert!(MAHARASHTRA.contains("Pune", "Haveli"));
        assert!(!MAHARASHTRA.contains("Nashik", "Haveli"));
    }

    #[test]
    fn unknown_region_has_no_sub_regions() {
        assert!(MAHARASHTRA.sub_regions("Atlantis").is_empty());
        assert_eq!(MAHARASHTRA.resolve_sub_region("Atlantis", "Haveli"), None);
    }

    #[test]
    fn tag_keys_are_unique() {
        for catalog in [&EMERGENCY_SERVICES, &VOLUNTEER_INTERESTS] {
            let keys: HashSet<_> = catalog.iter().map(|tag| tag.key).collect();
            assert_eq!(keys.len(), catalog.iter().count());
        }
    }

    #[test]
    fn custom_tags_label_as_themselves() {
        assert_eq!(EMERGENCY_SERVICES.label("blood_donation"), "Blood Donation");
        assert_eq!(EMERGENCY_SERVICES.label("night shifts"), "night shifts");
    }
}
