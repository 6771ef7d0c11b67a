use std::sync::Arc;

use crate::ontology::{PropertyAssertion, PropertyDefinition, PropertyKind};

/// One property of an individual together with its asserted values.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyValueGroup {
    definition: Arc<PropertyDefinition>,
    values: Vec<PropertyAssertion>,
}

impl PropertyValueGroup {
    #[must_use]
    pub fn new(definition: Arc<PropertyDefinition>, values: Vec<PropertyAssertion>) -> Self {
        Self { definition, values }
    }

    /// Returns the shared property definition.
    #[must_use]
    pub fn definition(&self) -> &PropertyDefinition {
        &self.definition
    }

    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.definition.kind()
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.definition.display_name()
    }

    /// Asserted values in source order.
    #[must_use]
    pub fn values(&self) -> &[PropertyAssertion] {
        &self.values
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.definition.is_required()
    }

    /// Position of the group's bucket in the display order: missing mandatory
    /// data first, then filled mandatory, filled optional, empty optional.
    pub(crate) fn bucket(&self) -> u8 {
        match (self.is_required(), self.is_empty()) {
            (true, true) => 0,
            (true, false) => 1,
            (false, false) => 2,
            (false, true) => 3,
        }
    }
}
