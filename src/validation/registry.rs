use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;

use super::{Validator, ValidatorError, Validity};
use crate::ontology::{Iri, Restriction, XSD};

/// Validator checking that a candidate is well formed for a data type.
pub type DataTypeValidator = fn(&str) -> Validity;

/// Lookup tables from data-type IRIs and restriction kinds to validators.
#[derive(Clone)]
pub struct ValidatorRegistry {
    data_types: BTreeMap<String, DataTypeValidator>,
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("data_types", &self.data_types.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register_data_type(format!("{XSD}string"), string_validator);
        registry.register_data_type(format!("{XSD}double"), double_validator);
        registry.register_data_type(format!("{XSD}float"), double_validator);
        registry
    }
}

impl ValidatorRegistry {
    /// Registry without any data type; mostly useful for tests.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data_types: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) the base validator for a data type.
    pub fn register_data_type(&mut self, data_type: impl Into<String>, validator: DataTypeValidator) {
        self.data_types.insert(data_type.into(), validator);
    }

    /// Returns the base validator of a data type.
    pub fn data_type(&self, data_type: &Iri) -> Result<DataTypeValidator, ValidatorError> {
        self.data_types
            .get(data_type.as_str())
            .copied()
            .ok_or_else(|| ValidatorError::UnsupportedDataType(data_type.clone()))
    }

    /// Returns `true` if a base validator is registered for the data type.
    #[must_use]
    pub fn supports(&self, data_type: &Iri) -> bool {
        self.data_types.contains_key(data_type.as_str())
    }

    /// Builds the validator enforcing one restriction.
    pub fn restriction(&self, restriction: &Restriction) -> Result<Validator, ValidatorError> {
        match restriction {
            Restriction::MinValue(min) => Ok(min_value_validator(*min)),
            Restriction::MaxValue(max) => Ok(max_value_validator(*max)),
            Restriction::RegExp(pattern) => regexp_validator(pattern),
            Restriction::OneOf(allowed) => Ok(one_of_validator(allowed.clone())),
        }
    }
}

fn string_validator(_candidate: &str) -> Validity {
    Validity::ok()
}

fn parse_number(candidate: &str) -> Option<f64> {
    candidate
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn double_validator(candidate: &str) -> Validity {
    match parse_number(candidate) {
        Some(_) => Validity::ok(),
        None => Validity::error("Not a number!"),
    }
}

// Unparseable input fails the bound; it only reaches here under a
// non-numeric data type.
fn min_value_validator(min: f64) -> Validator {
    Validator::new(move |candidate| match parse_number(candidate) {
        Some(number) if number >= min => Validity::ok(),
        _ => Validity::error(format!("Must be more than or equal to {min}")),
    })
}

fn max_value_validator(max: f64) -> Validator {
    Validator::new(move |candidate| match parse_number(candidate) {
        Some(number) if number <= max => Validity::ok(),
        _ => Validity::error(format!("Must be less than or equal to {max}")),
    })
}

fn regexp_validator(pattern: &str) -> Result<Validator, ValidatorError> {
    let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
        ValidatorError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;
    let pattern = pattern.to_string();
    Ok(Validator::new(move |candidate| {
        if regex.is_match(candidate) {
            Validity::ok()
        } else {
            Validity::from_errors([
                "Invalid string format.".to_string(),
                format!("Must follow regular expression {pattern}"),
            ])
        }
    }))
}

fn one_of_validator(allowed: Vec<String>) -> Validator {
    Validator::new(move |candidate| {
        if allowed.iter().any(|value| value == candidate) {
            Validity::ok()
        } else {
            Validity::error(format!("Must be one of: {}", allowed.join(", ")))
        }
    })
}
