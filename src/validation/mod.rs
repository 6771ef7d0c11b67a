//! Declarative validators for data property values.
//!
//! A [`ValidatorComposer`] turns a property's declared [`DataRange`] into one
//! [`Validator`]. Building a validator can fail with a [`ValidatorError`] when
//! the schema is malformed; running one never fails and reports problems as a
//! [`Validity`] instead.
//!
//! [`DataRange`]: crate::ontology::DataRange

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::ontology::{Iri, OntologyError};

pub mod composer;
pub mod registry;
pub mod validity;

pub use composer::{SchemaValidators, ValidatorComposer};
pub use registry::{DataTypeValidator, ValidatorRegistry};
pub use validity::Validity;

/// Pure validation function over a candidate string.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&str) -> Validity + Send + Sync>);

impl Validator {
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> Validity + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Validates a candidate value.
    #[must_use]
    pub fn validate(&self, candidate: &str) -> Validity {
        (self.0)(candidate)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator")
    }
}

/// Configuration errors raised while building validators.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// No base validator is registered for the data type.
    #[error("unsupported data type: '{0}'")]
    UnsupportedDataType(Iri),
    /// A `regExp` restriction carried a pattern that does not compile.
    #[error("invalid regular expression `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    /// Decoding the value range from its wire shape failed.
    #[error(transparent)]
    Schema(#[from] OntologyError),
}
