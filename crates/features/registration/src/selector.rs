use seva_domain::catalog::{MAHARASHTRA, RegionCatalog};

/// Cascading district → taluka choice.
///
/// Both values are borrowed from the catalog, so a selected sub-region is always one the
/// catalog lists under the selected region. Invalid input is ignored and reported as
/// `false`; nothing here panics.
#[derive(Debug, Clone, Copy)]
pub struct RegionSelector {
    catalog: &'static RegionCatalog,
    region: Option<&'static str>,
    sub_region: Option<&'static str>,
}

impl RegionSelector {
    #[must_use]
    pub const fn new(catalog: &'static RegionCatalog) -> Self {
        Self { catalog, region: None, sub_region: None }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static RegionCatalog {
        self.catalog
    }

    #[must_use]
    pub const fn region(&self) -> Option<&'static str> {
        self.region
    }

    #[must_use]
    pub const fn sub_region(&self) -> Option<&'static str> {
        self.sub_region
    }

    /// Selects a region and clears the sub-region in the same step.
    ///
    /// Unknown regions leave the selection untouched.
    pub fn set_region(&mut self, name: &str) -> bool {
        let Some(region) = self.catalog.resolve_region(name) else {
            tracing::debug!(region = name, "Ignoring unknown region");
            return false;
        };
        self.region = Some(region);
        self.sub_region = None;
        true
    }

    /// Accepts `name` only when it is listed under the current region.
    pub fn set_sub_region(&mut self, name: &str) -> bool {
        let resolved = self.region.and_then(|region| self.catalog.resolve_sub_region(region, name));
        match resolved {
            Some(sub_region) => {
                self.sub_region = Some(sub_region);
                true
            },
            None => {
                tracing::debug!(region = ?self.region, sub_region = name, "Ignoring sub-region");
                false
            },
        }
    }

    pub const fn clear_sub_region(&mut self) {
        self.sub_region = None;
    }

    pub const fn clear(&mut self) {
        self.region = None;
        self.sub_region = None;
    }

    /// Options for the sub-region dropdown; empty until a region is chosen.
    #[must_use]
    pub fn available_sub_regions(&self) -> &'static [&'static str] {
        self.region.map_or(&[], |region| self.catalog.sub_regions(region))
    }
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self::new(&MAHARASHTRA)
    }
}

impl PartialEq for RegionSelector {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog)
            && self.region == other.region
            && self.sub_region == other.sub_region
    }
}

impl Eq for RegionSelector {}
