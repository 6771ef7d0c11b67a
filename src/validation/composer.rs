use std::collections::BTreeMap;

use tracing::debug;

use super::{Validator, ValidatorError, ValidatorRegistry, Validity};
use crate::ontology::{ClassSchema, DataRange, DataRangeRecord, Iri, PropertyKind};

/// Builds composed validators from declared value ranges.
#[derive(Clone, Debug, Default)]
pub struct ValidatorComposer {
    registry: ValidatorRegistry,
}

impl ValidatorComposer {
    #[must_use]
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Compiles a value range into a single validator.
    ///
    /// The data-type check runs first and short-circuits: when it fails its
    /// result is returned as is, since bounds and patterns are meaningless on
    /// malformed input. Otherwise every restriction runs and the results are
    /// aggregated in declaration order.
    ///
    /// # Errors
    ///
    /// Fails when the data type is not registered or a restriction cannot be
    /// built.
    pub fn compile(&self, range: &DataRange) -> Result<Validator, ValidatorError> {
        let base = self.registry.data_type(range.data_type())?;
        let restrictions = range
            .restrictions()
            .iter()
            .map(|restriction| self.registry.restriction(restriction))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Validator::new(move |candidate| {
            let validity = base(candidate);
            if !validity.is_valid() {
                return validity;
            }
            restrictions
                .iter()
                .map(|validator| validator.validate(candidate))
                .collect()
        }))
    }

    /// Decodes a wire-level value range and compiles it.
    ///
    /// # Errors
    ///
    /// Fails on malformed identifiers, unknown restriction kinds and the
    /// conditions listed on [`Self::compile`].
    pub fn compile_record(&self, record: DataRangeRecord) -> Result<Validator, ValidatorError> {
        let range = DataRange::try_from(record)?;
        self.compile(&range)
    }

    /// Compiles validators for every data property of a class that declares
    /// a value range.
    ///
    /// # Errors
    ///
    /// Fails on the first property whose range cannot be compiled.
    pub fn compile_schema(&self, schema: &ClassSchema) -> Result<SchemaValidators, ValidatorError> {
        let mut validators = BTreeMap::new();
        for property in schema.properties() {
            if property.kind() != PropertyKind::Data {
                continue;
            }
            if let Some(range) = property.range() {
                validators.insert(property.uri().clone(), self.compile(range)?);
            }
        }
        debug!(
            class = %schema.uri(),
            validators = validators.len(),
            "schema_validators_compiled"
        );
        Ok(SchemaValidators { validators })
    }
}

/// Validators of one class schema keyed by property identifier.
#[derive(Clone, Debug, Default)]
pub struct SchemaValidators {
    validators: BTreeMap<Iri, Validator>,
}

impl SchemaValidators {
    #[must_use]
    pub fn get(&self, property: &Iri) -> Option<&Validator> {
        self.validators.get(property)
    }

    /// Validates a candidate for a property. Properties without a declared
    /// range accept anything.
    #[must_use]
    pub fn validate(&self, property: &Iri, candidate: &str) -> Validity {
        self.get(property)
            .map_or_else(Validity::ok, |validator| validator.validate(candidate))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
