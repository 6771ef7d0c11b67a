use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ontology::{
    AssertedValue, ClassSchema, IndividualDto, Iri, PropertyAssertion, Resource,
};

use super::property_values::PropertyValueGroup;

/// Builds the ordered property groups of one individual.
///
/// Exactly one group is produced per schema property, empty when nothing is
/// asserted for it; values for properties outside the schema are ignored.
/// Groups are ordered required-empty, required-filled, optional-filled,
/// optional-empty, each bucket alphabetical by display name ignoring case.
/// Equal names keep schema order.
#[must_use]
pub fn build(schema: &ClassSchema, asserted: &[AssertedValue]) -> Vec<PropertyValueGroup> {
    let mut by_property: BTreeMap<&Iri, Vec<PropertyAssertion>> = BTreeMap::new();
    for value in asserted {
        by_property
            .entry(&value.property)
            .or_default()
            .push(value.value.clone());
    }

    let mut groups: Vec<PropertyValueGroup> = schema
        .properties()
        .iter()
        .map(|definition| {
            let values = by_property.remove(definition.uri()).unwrap_or_default();
            PropertyValueGroup::new(Arc::clone(definition), values)
        })
        .collect();

    groups.sort_by_cached_key(|group| (group.bucket(), group.display_name().to_lowercase()));
    groups
}

/// Render-ready view of one ontology individual.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    resource: Resource,
    class: Resource,
    groups: Vec<PropertyValueGroup>,
}

impl Individual {
    /// Builds the view from identity, class schema and asserted values.
    #[must_use]
    pub fn new(resource: Resource, schema: &ClassSchema, asserted: &[AssertedValue]) -> Self {
        Self {
            resource,
            class: schema.resource().clone(),
            groups: build(schema, asserted),
        }
    }

    #[must_use]
    pub fn from_dto(dto: &IndividualDto) -> Self {
        Self::new(dto.resource.clone(), &dto.owl_class, &dto.values)
    }

    #[must_use]
    pub fn info(&self) -> &Resource {
        &self.resource
    }

    #[must_use]
    pub fn class_info(&self) -> &Resource {
        &self.class
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.resource.display_name
    }

    /// Stable key distinguishing individuals in rendered lists.
    #[must_use]
    pub fn key(&self) -> String {
        format!("ind_{}", self.resource.uri)
    }

    /// Property groups in display order.
    #[must_use]
    pub fn property_values(&self) -> &[PropertyValueGroup] {
        &self.groups
    }

    /// Looks up the group of one property.
    #[must_use]
    pub fn property(&self, uri: &Iri) -> Option<&PropertyValueGroup> {
        self.groups
            .iter()
            .find(|group| group.definition().uri() == uri)
    }

    /// Missing mandatory properties; these always lead the display order.
    pub fn missing_required(&self) -> impl Iterator<Item = &PropertyValueGroup> {
        self.groups
            .iter()
            .take_while(|group| group.is_required() && group.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::{PropertyDefinition, PropertyKind};

    fn iri(local: &str) -> Iri {
        Iri::new(format!("https://example.org/{local}")).expect("valid iri")
    }

    fn schema(properties: Vec<PropertyDefinition>) -> ClassSchema {
        ClassSchema::from_definitions(Resource::new(iri("Station"), "Station"), properties)
            .expect("schema")
    }

    fn names(groups: &[PropertyValueGroup]) -> Vec<&str> {
        groups.iter().map(PropertyValueGroup::display_name).collect()
    }

    #[test]
    fn orders_by_bucket_then_name() {
        let schema = schema(vec![
            PropertyDefinition::new(iri("e"), "echo", PropertyKind::Data),
            PropertyDefinition::new(iri("d"), "Delta", PropertyKind::Data).required(),
            PropertyDefinition::new(iri("c"), "charlie", PropertyKind::Data),
            PropertyDefinition::new(iri("b"), "Bravo", PropertyKind::Data).required(),
            PropertyDefinition::new(iri("a"), "alpha", PropertyKind::Object).required(),
            PropertyDefinition::new(iri("f"), "Foxtrot", PropertyKind::Object),
        ]);
        let values = vec![
            AssertedValue::literal(iri("d"), "filled"),
            AssertedValue::literal(iri("c"), "filled"),
            AssertedValue::individual(iri("f"), iri("someone")),
        ];

        let groups = build(&schema, &values);
        assert_eq!(
            names(&groups),
            vec!["alpha", "Bravo", "Delta", "charlie", "Foxtrot", "echo"]
        );
    }

    #[test]
    fn equal_names_keep_schema_order() {
        let schema = schema(vec![
            PropertyDefinition::new(iri("first"), "Name", PropertyKind::Data),
            PropertyDefinition::new(iri("second"), "name", PropertyKind::Data),
        ]);
        let groups = build(&schema, &[]);
        assert_eq!(groups[0].definition().uri(), &iri("first"));
        assert_eq!(groups[1].definition().uri(), &iri("second"));
    }

    #[test]
    fn values_outside_schema_are_ignored() {
        let schema = schema(vec![PropertyDefinition::new(
            iri("a"),
            "A",
            PropertyKind::Data,
        )]);
        let groups = build(
            &schema,
            &[
                AssertedValue::literal(iri("zzz"), "stray"),
                AssertedValue::literal(iri("a"), "one"),
                AssertedValue::literal(iri("a"), "two"),
            ],
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].values(),
            &[
                PropertyAssertion::Literal("one".into()),
                PropertyAssertion::Literal("two".into())
            ]
        );
    }

    #[test]
    fn individual_exposes_identity() {
        let schema = schema(vec![
            PropertyDefinition::new(iri("name"), "Name", PropertyKind::Data).required(),
            PropertyDefinition::new(iri("note"), "Note", PropertyKind::Data),
        ]);
        let dto = IndividualDto {
            resource: Resource::new(iri("HTM"), "Hyltemossa"),
            owl_class: schema,
            values: vec![AssertedValue::literal(iri("note"), "tall tower")],
        };
        let individual = Individual::from_dto(&dto);
        assert_eq!(individual.label(), "Hyltemossa");
        assert_eq!(individual.key(), "ind_https://example.org/HTM");
        assert_eq!(individual.class_info().uri, iri("Station"));
        let missing: Vec<_> = individual
            .missing_required()
            .map(PropertyValueGroup::display_name)
            .collect();
        assert_eq!(missing, vec!["Name"]);
        assert!(individual.property(&iri("note")).is_some_and(|group| !group.is_empty()));
    }
}
