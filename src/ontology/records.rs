//! Wire shapes of class schemas as decoded from the metadata service.
//!
//! Records stay stringly typed until converted; the conversions are where
//! malformed schemas surface as [`OntologyError`]s.

use serde::Deserialize;

use super::entities::{
    ClassSchema, DataRange, OntologyError, PropertyDefinition, PropertyKind, Resource,
    Restriction,
};
use super::value_objects::Iri;

/// Restriction as delivered on the wire, e.g. `{"type": "minValue", "minValue": 0}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub regexp: Option<String>,
    #[serde(default)]
    pub values: Option<Vec<String>>,
}

impl TryFrom<RestrictionRecord> for Restriction {
    type Error = OntologyError;

    fn try_from(record: RestrictionRecord) -> Result<Self, Self::Error> {
        match record.kind.as_str() {
            "minValue" => record
                .min_value
                .map(Restriction::MinValue)
                .ok_or(OntologyError::MissingRestrictionParameter {
                    kind: "minValue",
                    parameter: "minValue",
                }),
            "maxValue" => record
                .max_value
                .map(Restriction::MaxValue)
                .ok_or(OntologyError::MissingRestrictionParameter {
                    kind: "maxValue",
                    parameter: "maxValue",
                }),
            "regExp" => record
                .regexp
                .map(Restriction::RegExp)
                .ok_or(OntologyError::MissingRestrictionParameter {
                    kind: "regExp",
                    parameter: "regexp",
                }),
            "oneOf" => record
                .values
                .map(Restriction::OneOf)
                .ok_or(OntologyError::MissingRestrictionParameter {
                    kind: "oneOf",
                    parameter: "values",
                }),
            other => Err(OntologyError::UnsupportedRestriction(other.to_string())),
        }
    }
}

/// Value range as delivered on the wire.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRangeRecord {
    pub data_type: String,
    #[serde(default)]
    pub restrictions: Vec<RestrictionRecord>,
}

impl TryFrom<DataRangeRecord> for DataRange {
    type Error = OntologyError;

    fn try_from(record: DataRangeRecord) -> Result<Self, Self::Error> {
        let mut range = DataRange::new(Iri::new(record.data_type)?);
        for restriction in record.restrictions {
            range = range.with_restriction(Restriction::try_from(restriction)?);
        }
        Ok(range)
    }
}

/// Property definition as delivered on the wire.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub property_uri: String,
    pub display_name: String,
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub restrictions: Vec<RestrictionRecord>,
}

impl TryFrom<PropertyRecord> for PropertyDefinition {
    type Error = OntologyError;

    fn try_from(record: PropertyRecord) -> Result<Self, Self::Error> {
        let uri = Iri::new(record.property_uri)?;
        let kind: PropertyKind = record.kind.parse()?;
        let mut property = PropertyDefinition::new(uri.clone(), record.display_name, kind);
        if record.required {
            property = property.required();
        }

        match record.data_type {
            Some(data_type) if kind == PropertyKind::Data => {
                let range = DataRange::try_from(DataRangeRecord {
                    data_type,
                    restrictions: record.restrictions,
                })?;
                Ok(property.with_range(range))
            }
            None if !record.restrictions.is_empty() => Err(OntologyError::MissingDataType(uri)),
            _ => Ok(property),
        }
    }
}

/// Class schema as delivered on the wire.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub uri: String,
    pub display_name: String,
    #[serde(default)]
    pub properties: Vec<PropertyRecord>,
}

impl TryFrom<ClassRecord> for ClassSchema {
    type Error = OntologyError;

    fn try_from(record: ClassRecord) -> Result<Self, Self::Error> {
        let resource = Resource::new(Iri::new(record.uri)?, record.display_name);
        let definitions = record
            .properties
            .into_iter()
            .map(PropertyDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        ClassSchema::from_definitions(resource, definitions)
    }
}
