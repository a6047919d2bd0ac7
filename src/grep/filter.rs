use crate::grep::entry::{CategoryGroup, DeclEntry};

/// Set of enabled category buckets.
///
/// With no bucket enabled the filter behaves as if every bucket were
/// enabled; it is never empty in effect. The `templates` flag participates
/// in that check but no kind maps to it: class templates and partial
/// specializations are gated by `classes`, matching the long-standing CLI
/// contract. Do not re-route them without a product decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub classes: bool,
    pub templates: bool,
    pub structs: bool,
    pub functions: bool,
    pub variables: bool,
}

impl FilterSpec {
    pub fn any_enabled(&self) -> bool {
        self.classes || self.templates || self.structs || self.functions || self.variables
    }

    /// Whether `entry`'s bucket is enabled. Never inspects the identifier.
    pub fn accepts(&self, entry: &DeclEntry) -> bool {
        if !self.any_enabled() {
            return true;
        }
        match entry.group() {
            CategoryGroup::Class => self.classes,
            CategoryGroup::Struct => self.structs,
            CategoryGroup::Function => self.functions,
            CategoryGroup::Variable => self.variables,
        }
    }
}
