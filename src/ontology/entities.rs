use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::value_objects::{Iri, IriError};

/// Identity of an ontology resource: its IRI and the name shown to users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub uri: Iri,
    pub display_name: String,
}

impl Resource {
    /// Creates a resource from its identifier and display name.
    #[must_use]
    pub fn new(uri: Iri, display_name: impl Into<String>) -> Self {
        Self {
            uri,
            display_name: display_name.into(),
        }
    }
}

/// Classifies the type of values a property can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Object properties link individuals.
    #[serde(rename = "objectProperty")]
    Object,
    /// Data properties capture literal values.
    #[serde(rename = "dataProperty")]
    Data,
}

impl PropertyKind {
    /// Wire name of the kind as delivered by the metadata service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "objectProperty",
            Self::Data => "dataProperty",
        }
    }
}

impl Display for PropertyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = OntologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "objectProperty" => Ok(Self::Object),
            "dataProperty" => Ok(Self::Data),
            other => Err(OntologyError::UnknownPropertyKind(other.to_string())),
        }
    }
}

/// Additional constraint on the value range of a data property.
#[derive(Clone, Debug, PartialEq)]
pub enum Restriction {
    /// Inclusive numeric lower bound.
    MinValue(f64),
    /// Inclusive numeric upper bound.
    MaxValue(f64),
    /// Regular expression the whole value must match.
    RegExp(String),
    /// Closed enumeration of accepted strings, in declaration order.
    OneOf(Vec<String>),
}

impl Restriction {
    /// Wire name of the restriction kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MinValue(_) => "minValue",
            Self::MaxValue(_) => "maxValue",
            Self::RegExp(_) => "regExp",
            Self::OneOf(_) => "oneOf",
        }
    }
}

/// Declared value range of a data property.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRange {
    data_type: Iri,
    restrictions: Vec<Restriction>,
}

impl DataRange {
    /// Creates an unrestricted range of the given data type.
    #[must_use]
    pub fn new(data_type: Iri) -> Self {
        Self {
            data_type,
            restrictions: Vec::new(),
        }
    }

    /// Appends a restriction; declaration order is preserved.
    #[must_use]
    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    #[must_use]
    pub fn data_type(&self) -> &Iri {
        &self.data_type
    }

    #[must_use]
    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }
}

/// Property definition owned by a class schema.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDefinition {
    resource: Resource,
    kind: PropertyKind,
    required: bool,
    range: Option<DataRange>,
}

impl PropertyDefinition {
    /// Creates an optional property with the provided identity and kind.
    #[must_use]
    pub fn new(uri: Iri, display_name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            resource: Resource::new(uri, display_name),
            kind,
            required: false,
            range: None,
        }
    }

    /// Marks the property as mandatory.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a value range. Only meaningful for data properties.
    #[must_use]
    pub fn with_range(mut self, range: DataRange) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns the property identifier.
    #[must_use]
    pub fn uri(&self) -> &Iri {
        &self.resource.uri
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.resource.display_name
    }

    /// Returns the property kind.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the declared value range, if any.
    #[must_use]
    pub fn range(&self) -> Option<&DataRange> {
        self.range.as_ref()
    }
}

/// Ordered property definitions applicable to individuals of one class.
///
/// Definitions are reference counted so every individual built from the
/// schema shares the same read-only copies.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassSchema {
    resource: Resource,
    properties: Vec<Arc<PropertyDefinition>>,
}

impl ClassSchema {
    /// Creates an empty schema for the given class.
    #[must_use]
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            properties: Vec::new(),
        }
    }

    /// Adds a property definition, rejecting duplicate identifiers.
    pub fn add_property(&mut self, property: PropertyDefinition) -> Result<(), OntologyError> {
        if self.property(property.uri()).is_some() {
            return Err(OntologyError::DuplicateProperty(property.uri().clone()));
        }
        self.properties.push(Arc::new(property));
        Ok(())
    }

    /// Builds a schema from already decoded definitions.
    pub fn from_definitions(
        resource: Resource,
        definitions: impl IntoIterator<Item = PropertyDefinition>,
    ) -> Result<Self, OntologyError> {
        let mut schema = Self::new(resource);
        for definition in definitions {
            schema.add_property(definition)?;
        }
        Ok(schema)
    }

    #[must_use]
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns the class identifier.
    #[must_use]
    pub fn uri(&self) -> &Iri {
        &self.resource.uri
    }

    /// Returns the property definitions in schema order.
    #[must_use]
    pub fn properties(&self) -> &[Arc<PropertyDefinition>] {
        &self.properties
    }

    /// Retrieves a property definition by identifier.
    #[must_use]
    pub fn property(&self, uri: &Iri) -> Option<&Arc<PropertyDefinition>> {
        self.properties.iter().find(|property| property.uri() == uri)
    }
}

/// Object of one asserted triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum PropertyAssertion {
    /// Object properties target another individual.
    Individual(Iri),
    /// Data properties store literal values.
    Literal(String),
}

impl PropertyAssertion {
    /// Textual form of the value, the literal itself or the target IRI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual(iri) => iri.as_str(),
            Self::Literal(literal) => literal,
        }
    }
}

/// One asserted value attached to a subject and property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertedValue {
    pub property: Iri,
    pub value: PropertyAssertion,
}

impl AssertedValue {
    #[must_use]
    pub fn literal(property: Iri, value: impl Into<String>) -> Self {
        Self {
            property,
            value: PropertyAssertion::Literal(value.into()),
        }
    }

    #[must_use]
    pub fn individual(property: Iri, target: Iri) -> Self {
        Self {
            property,
            value: PropertyAssertion::Individual(target),
        }
    }
}

/// Raw individual as delivered by the metadata service: identity, the class
/// schema it belongs to and a flat list of asserted values.
#[derive(Clone, Debug, PartialEq)]
pub struct IndividualDto {
    pub resource: Resource,
    pub owl_class: ClassSchema,
    pub values: Vec<AssertedValue>,
}

/// Errors raised while processing class schemas.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OntologyError {
    /// Attempted to add a property with an existing identifier.
    #[error("property `{0}` already exists")]
    DuplicateProperty(Iri),
    /// Schema record carried a property kind other than data or object.
    #[error("unknown OWL property type: {0}")]
    UnknownPropertyKind(String),
    /// Restriction record carried an unsupported kind.
    #[error("unsupported data type restriction: '{0}'")]
    UnsupportedRestriction(String),
    /// Restriction record lacked the parameter its kind needs.
    #[error("restriction `{kind}` is missing its `{parameter}` parameter")]
    MissingRestrictionParameter {
        kind: &'static str,
        parameter: &'static str,
    },
    /// A data property record declared restrictions without a data type.
    #[error("property `{0}` declares restrictions but no data type")]
    MissingDataType(Iri),
    /// Schema record contained a malformed identifier.
    #[error(transparent)]
    Iri(#[from] IriError),
}

#[cfg(test)]
mod tests {
    use super::{ClassSchema, DataRange, PropertyDefinition, PropertyKind, Resource, Restriction};
    use crate::ontology::value_objects::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    #[test]
    fn property_kind_parses_wire_names() {
        assert_eq!("dataProperty".parse::<PropertyKind>(), Ok(PropertyKind::Data));
        assert_eq!("objectProperty".parse::<PropertyKind>(), Ok(PropertyKind::Object));
        let err = "annotationProperty"
            .parse::<PropertyKind>()
            .expect_err("unknown kind");
        assert_eq!(err.to_string(), "unknown OWL property type: annotationProperty");
    }

    #[test]
    fn definitions_default_to_optional() {
        let property = PropertyDefinition::new(
            iri("https://example.org/hasElevation"),
            "Elevation",
            PropertyKind::Data,
        );
        assert!(!property.is_required());
        assert!(property.range().is_none());

        let required = property
            .required()
            .with_range(DataRange::new(Iri::xsd("double").expect("xsd")).with_restriction(
                Restriction::MinValue(0.0),
            ));
        assert!(required.is_required());
        assert_eq!(
            required.range().map(|range| range.restrictions().len()),
            Some(1)
        );
    }

    #[test]
    fn schema_rejects_duplicate_properties() {
        let mut schema = ClassSchema::new(Resource::new(iri("https://example.org/AS"), "AS"));
        let property =
            PropertyDefinition::new(iri("https://example.org/hasName"), "Name", PropertyKind::Data);
        schema.add_property(property.clone()).expect("first insert");
        let err = schema.add_property(property).expect_err("duplicate");
        assert!(matches!(err, super::OntologyError::DuplicateProperty(_)));
        assert_eq!(schema.properties().len(), 1);
    }

    #[test]
    fn restriction_kinds_match_wire_names() {
        assert_eq!(Restriction::MinValue(1.0).kind(), "minValue");
        assert_eq!(Restriction::MaxValue(1.0).kind(), "maxValue");
        assert_eq!(Restriction::RegExp("a".into()).kind(), "regExp");
        assert_eq!(Restriction::OneOf(vec![]).kind(), "oneOf");
    }
}
