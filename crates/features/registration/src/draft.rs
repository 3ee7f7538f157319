use crate::field::Field;
use crate::flow::FlowKind;
use crate::selector::RegionSelector;
use seva_domain::catalog::TagCatalog;
use seva_domain::registration::{Attachment, Availability, Gender, IdKind};

/// Catalog keys picked from a [`TagCatalog`] plus free-text additions.
#[derive(Debug, Clone, Copy)]
struct CatalogRef(&'static TagCatalog);

impl PartialEq for CatalogRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for CatalogRef {}

/// Selected tags, kept in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    catalog: CatalogRef,
    selected: Vec<&'static str>,
    custom: Vec<String>,
}

impl TagSelection {
    #[must_use]
    pub const fn new(catalog: &'static TagCatalog) -> Self {
        Self { catalog: CatalogRef(catalog), selected: Vec::new(), custom: Vec::new() }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'static TagCatalog {
        self.catalog.0
    }

    #[must_use]
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.iter().any(|k| *k == key)
    }

    /// Flips a catalog key; unknown keys are ignored and reported as `false`.
    pub fn toggle(&mut self, key: &str) -> bool {
        let Some(tag) = self.catalog.0.get(key) else {
            return false;
        };
        if let Some(pos) = self.selected.iter().position(|k| *k == tag.key) {
            self.selected.remove(pos);
        } else {
            self.selected.push(tag.key);
        }
        true
    }

    pub fn select(&mut self, key: &str) -> bool {
        match self.catalog.0.get(key) {
            Some(tag) if !self.is_selected(tag.key) => {
                self.selected.push(tag.key);
                true
            },
            Some(_) => true,
            None => false,
        }
    }

    /// Adds a free-text tag.
    ///
    /// Blank text and case-insensitive duplicates are ignored. Text naming a catalog entry
    /// (by key or label) selects that entry instead.
    pub fn add_custom(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        if let Some(tag) =
            self.catalog.0.iter().find(|t| t.key == text || t.label.eq_ignore_ascii_case(text))
        {
            return self.select(tag.key);
        }
        if self.custom.iter().any(|c| c.eq_ignore_ascii_case(text)) {
            return false;
        }
        self.custom.push(text.to_owned());
        true
    }

    pub fn remove_custom(&mut self, text: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|c| c != text);
        before != self.custom.len()
    }

    pub fn selected(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.selected.iter().copied()
    }

    pub fn custom(&self) -> impl Iterator<Item = &str> {
        self.custom.iter().map(String::as_str)
    }

    /// Everything that goes on the wire: catalog keys first, then custom text.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(|key| &**key).chain(self.custom())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len() + self.custom.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.custom.clear();
    }
}

/// Everything typed into one registration attempt.
///
/// Text inputs are kept exactly as typed; validation and payload building do the
/// trimming. The draft never validates itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    flow: FlowKind,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub alternate_phone: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub occupation: String,
    pub organisation: String,
    pub address: String,
    pub location: RegionSelector,
    pub postal_code: String,
    pub id_kind: Option<IdKind>,
    pub id_number: String,
    pub id_document: Option<Attachment>,
    pub photo: Option<Attachment>,
    pub tags: TagSelection,
    pub availability: Availability,
    pub skills: String,
    pub motivation: String,
    pub experience: String,
    pub emergency_name: String,
    pub emergency_phone: String,
    pub emergency_relation: String,
    pub consent: bool,
}

impl RegistrationDraft {
    /// An empty draft for `flow`.
    #[must_use]
    pub fn new(flow: FlowKind) -> Self {
        Self {
            flow,
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            alternate_phone: String::new(),
            age: String::new(),
            gender: None,
            occupation: String::new(),
            organisation: String::new(),
            address: String::new(),
            location: RegionSelector::default(),
            postal_code: String::new(),
            id_kind: None,
            id_number: String::new(),
            id_document: None,
            photo: None,
            tags: TagSelection::new(flow.tag_catalog()),
            availability: Availability::empty(),
            skills: String::new(),
            motivation: String::new(),
            experience: String::new(),
            emergency_name: String::new(),
            emergency_phone: String::new(),
            emergency_relation: String::new(),
            consent: false,
        }
    }

    #[must_use]
    pub const fn flow(&self) -> FlowKind {
        self.flow
    }

    /// Back to the freshly opened state.
    pub fn clear(&mut self) {
        *self = Self::new(self.flow);
    }

    /// Whether nothing has been entered yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::new(self.flow)
    }

    /// Current value of a text field; `None` for non-text fields.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        self.text_slot(field).map(String::as_str)
    }

    /// Overwrites a text field; returns `false` for non-text fields.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.text_slot_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            },
            None => false,
        }
    }

    /// The attachment stored for a file field.
    #[must_use]
    pub const fn attachment(&self, field: Field) -> Option<&Attachment> {
        match field {
            Field::IdDocument => self.id_document.as_ref(),
            Field::Photo => self.photo.as_ref(),
            _ => None,
        }
    }

    /// Stores or removes a file; returns `false` for non-file fields.
    pub fn set_attachment(&mut self, field: Field, file: Option<Attachment>) -> bool {
        match field {
            Field::IdDocument => self.id_document = file,
            Field::Photo => self.photo = file,
            _ => return false,
        }
        true
    }

    const fn text_slot(&self, field: Field) -> Option<&String> {
        Some(match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::AlternatePhone => &self.alternate_phone,
            Field::Age => &self.age,
            Field::Occupation => &self.occupation,
            Field::Organisation => &self.organisation,
            Field::Address => &self.address,
            Field::PostalCode => &self.postal_code,
            Field::IdNumber => &self.id_number,
            Field::Skills => &self.skills,
            Field::Motivation => &self.motivation,
            Field::Experience => &self.experience,
            Field::EmergencyName => &self.emergency_name,
            Field::EmergencyPhone => &self.emergency_phone,
            Field::EmergencyRelation => &self.emergency_relation,
            _ => return None,
        })
    }

    const fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::AlternatePhone => &mut self.alternate_phone,
            Field::Age => &mut self.age,
            Field::Occupation => &mut self.occupation,
            Field::Organisation => &mut self.organisation,
            Field::Address => &mut self.address,
            Field::PostalCode => &mut self.postal_code,
            Field::IdNumber => &mut self.id_number,
            Field::Skills => &mut self.skills,
            Field::Motivation => &mut self.motivation,
            Field::Experience => &mut self.experience,
            Field::EmergencyName => &mut self.emergency_name,
            Field::EmergencyPhone => &mut self.emergency_phone,
            Field::EmergencyRelation => &mut self.emergency_relation,
            _ => return None,
        })
    }
}
