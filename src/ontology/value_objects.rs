use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace of the XML Schema data types used by value ranges.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Value object ensuring that supplied text represents a valid IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`] value object.
    ///
    /// Station, property and graph identifiers all go through this
    /// constructor, so downstream grouping can compare them textually.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        NamedNode::new(value.as_str()).map_err(|_| IriError::Invalid {
            value: value.clone(),
        })?;
        Ok(Self { value })
    }

    /// Builds the IRI of an XSD data type, e.g. `xsd("double")`.
    pub fn xsd(local: &str) -> Result<Self, IriError> {
        Self::new(format!("{XSD}{local}"))
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the fragment or last path segment of the IRI.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.value
            .rsplit(|c| c == '#' || c == '/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.value)
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Iri> for String {
    fn from(value: Iri) -> Self {
        value.value
    }
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text could not be parsed as an IRI.
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

#[cfg(test)]
mod tests {
    use super::Iri;

    #[test]
    fn accepts_valid_iri() {
        let iri = Iri::new("http://meta.icos-cp.eu/resources/stations/AS_HTM").expect("valid IRI");
        assert_eq!(
            iri.as_str(),
            "http://meta.icos-cp.eu/resources/stations/AS_HTM"
        );
    }

    #[test]
    fn rejects_invalid_iri() {
        let err = Iri::new("not an iri").expect_err("invalid IRI");
        assert!(matches!(err, super::IriError::Invalid { value } if value == "not an iri"));
    }

    #[test]
    fn local_name_prefers_fragment_then_segment() {
        let fragment = Iri::xsd("double").expect("xsd iri");
        assert_eq!(fragment.local_name(), "double");

        let segment = Iri::new("http://example.org/stations/HTM/").expect("segment iri");
        assert_eq!(segment.local_name(), "HTM");
    }

    #[test]
    fn deserializes_through_validation() {
        let ok: Iri = serde_json::from_str("\"https://example.org/a\"").expect("valid iri");
        assert_eq!(ok.as_str(), "https://example.org/a");
        assert!(serde_json::from_str::<Iri>("\"no spaces allowed\"").is_err());
    }
}
