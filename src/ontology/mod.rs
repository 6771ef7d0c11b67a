//! Ontology primitives describing station classes and their individuals.
//!
//! The module holds pure value objects and schema definitions only. Decoding
//! from the metadata service's wire shapes lives in [`records`].

pub mod entities;
pub mod records;
pub mod value_objects;

pub use entities::{
    AssertedValue, ClassSchema, DataRange, IndividualDto, OntologyError, PropertyAssertion,
    PropertyDefinition, PropertyKind, Resource, Restriction,
};
pub use records::{ClassRecord, DataRangeRecord, PropertyRecord, RestrictionRecord};
pub use value_objects::{Iri, IriError, XSD};
