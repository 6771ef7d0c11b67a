use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::aggregator::first_values;
use super::rows::Triple;

/// Maps predicate URIs to the logical property names a form edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyLookup {
    names: BTreeMap<String, String>,
}

impl PropertyLookup {
    /// Builds the lookup for property names living under one namespace, so
    /// `hasShortName` is matched by `{namespace}hasShortName`.
    pub fn new<I, S>(namespace: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.into();
                (format!("{namespace}{name}"), name)
            })
            .collect()
    }

    /// Logical name of a predicate, if it is a known property.
    #[must_use]
    pub fn name_of(&self, predicate: &str) -> Option<&str> {
        self.names.get(predicate).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, String)> for PropertyLookup {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Layer a merged value was taken from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Provisional data asserted in the base graph.
    Provisional,
    /// Labeling data asserted in the overlay graph.
    Override,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MergedValue {
    pub value: String,
    pub provenance: Provenance,
}

/// One value per logical property after resolving both layers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedRecord {
    values: BTreeMap<String, MergedValue>,
}

impl MergedRecord {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|merged| merged.value.as_str())
    }

    #[must_use]
    pub fn provenance(&self, name: &str) -> Option<Provenance> {
        self.values.get(name).map(|merged| merged.provenance)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MergedValue)> {
        self.values.iter().map(|(name, merged)| (name.as_str(), merged))
    }

    /// Plain name to value mapping, dropping provenance.
    #[must_use]
    pub fn to_values(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(name, merged)| (name.clone(), merged.value.clone()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Names of the two graphs a station's triples are split across.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerGraphs<'a> {
    pub provisional: &'a str,
    pub labeling: &'a str,
}

fn layer<'a>(
    rows: impl IntoIterator<Item = &'a Triple>,
    lookup: &PropertyLookup,
) -> BTreeMap<String, String> {
    let rows: Vec<&Triple> = rows.into_iter().collect();
    let known: Vec<&Triple> = rows
        .iter()
        .copied()
        .filter(|triple| lookup.name_of(&triple.predicate).is_some())
        .collect();
    if known.len() < rows.len() {
        debug!(dropped = rows.len() - known.len(), "unknown_predicates_dropped");
    }

    first_values(known)
        .into_iter()
        .filter_map(|(predicate, object)| {
            lookup
                .name_of(predicate)
                .map(|name| (name.to_string(), object.to_string()))
        })
        .collect()
}

/// Merges provisional and labeling triples of one subject.
///
/// Triples with predicates outside `lookup` are ignored. Each layer keeps the
/// first value seen per property; a property asserted in the overlay replaces
/// the provisional value as a whole.
pub fn merge<'a>(
    base: impl IntoIterator<Item = &'a Triple>,
    overlay: impl IntoIterator<Item = &'a Triple>,
    lookup: &PropertyLookup,
) -> MergedRecord {
    merge_with_fallback(base, overlay, lookup, &BTreeMap::new())
}

/// Same as [`merge`], with explicit fallbacks for display-name fields.
///
/// For each `(name, value)` in `fallbacks`, when the overlay does not assert
/// `name` the fallback value is used instead of the base layer's own copy.
/// Fallbacks are never inferred from the base rows.
pub fn merge_with_fallback<'a>(
    base: impl IntoIterator<Item = &'a Triple>,
    overlay: impl IntoIterator<Item = &'a Triple>,
    lookup: &PropertyLookup,
    fallbacks: &BTreeMap<String, String>,
) -> MergedRecord {
    let mut values: BTreeMap<String, MergedValue> = layer(base, lookup)
        .into_iter()
        .map(|(name, value)| {
            let merged = MergedValue {
                value,
                provenance: Provenance::Provisional,
            };
            (name, merged)
        })
        .collect();

    let overrides = layer(overlay, lookup);
    for (name, value) in fallbacks {
        if !overrides.contains_key(name) {
            values.insert(
                name.clone(),
                MergedValue {
                    value: value.clone(),
                    provenance: Provenance::Provisional,
                },
            );
        }
    }
    for (name, value) in overrides {
        values.insert(
            name,
            MergedValue {
                value,
                provenance: Provenance::Override,
            },
        );
    }

    MergedRecord { values }
}

/// Splits a mixed query result by graph and merges the two layers.
///
/// Rows from any other graph, or without one, are ignored.
pub fn compile_station_info(
    rows: &[Triple],
    graphs: &LayerGraphs<'_>,
    lookup: &PropertyLookup,
) -> MergedRecord {
    let base = rows
        .iter()
        .filter(|triple| triple.graph.as_deref() == Some(graphs.provisional));
    let overlay = rows
        .iter()
        .filter(|triple| triple.graph.as_deref() == Some(graphs.labeling));
    merge(base, overlay, lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONTO: &str = "http://example.org/stationentry/";
    const LABELING: &str = "http://example.org/labeling/";
    const STATION: &str = "http://example.org/st/HTM";

    fn none() -> Vec<Triple> {
        Vec::new()
    }

    fn lookup() -> PropertyLookup {
        PropertyLookup::new(ONTO, ["hasShortName", "hasLongName", "hasLat"])
    }

    fn triple(property: &str, value: &str) -> Triple {
        Triple::new(STATION, format!("{ONTO}{property}"), value)
    }

    #[test]
    fn overlay_value_wins() {
        let base = vec![triple("hasShortName", "A")];
        let overlay = vec![triple("hasShortName", "B")];
        let merged = merge(&base, &overlay, &lookup());
        assert_eq!(merged.to_values(), BTreeMap::from([("hasShortName".into(), "B".into())]));
        assert_eq!(merged.provenance("hasShortName"), Some(Provenance::Override));
    }

    #[test]
    fn base_value_kept_without_overlay() {
        let base = vec![triple("hasShortName", "A")];
        let merged = merge(&base, &none(), &lookup());
        assert_eq!(merged.to_values(), BTreeMap::from([("hasShortName".into(), "A".into())]));
        assert_eq!(merged.provenance("hasShortName"), Some(Provenance::Provisional));
    }

    #[test]
    fn unknown_predicates_are_dropped() {
        let base = vec![
            triple("hasLat", "56.1"),
            triple("hasFutureField", "ignored"),
            Triple::new(STATION, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type", "AS"),
        ];
        let merged = merge(&base, &none(), &lookup());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("hasLat"), Some("56.1"));
    }

    #[test]
    fn properties_are_taken_whole_from_one_layer() {
        let base = vec![
            triple("hasShortName", "HTM-prov"),
            triple("hasLongName", "Hyltemossa provisional"),
        ];
        let overlay = vec![
            triple("hasLongName", "Hyltemossa"),
            triple("hasLongName", "Second overlay value"),
        ];
        let merged = merge(&base, &overlay, &lookup());
        assert_eq!(merged.get("hasShortName"), Some("HTM-prov"));
        assert_eq!(merged.get("hasLongName"), Some("Hyltemossa"));
        assert_eq!(merged.provenance("hasShortName"), Some(Provenance::Provisional));
    }

    #[test]
    fn display_name_falls_back_to_supplied_value() {
        let base = vec![triple("hasShortName", "editable copy")];
        let fallbacks = BTreeMap::from([("hasShortName".to_string(), "HTM".to_string())]);

        let merged = merge_with_fallback(&base, &none(), &lookup(), &fallbacks);
        assert_eq!(merged.get("hasShortName"), Some("HTM"));

        let overlay = vec![triple("hasShortName", "Labeled")];
        let merged = merge_with_fallback(&base, &overlay, &lookup(), &fallbacks);
        assert_eq!(merged.get("hasShortName"), Some("Labeled"));
    }

    #[test]
    fn station_info_splits_rows_by_graph() {
        let rows = vec![
            triple("hasShortName", "prov").in_graph(ONTO),
            triple("hasLat", "56.1").in_graph(ONTO),
            triple("hasShortName", "label").in_graph(LABELING),
            triple("hasLongName", "elsewhere").in_graph("http://example.org/other/"),
            triple("hasLongName", "nowhere"),
        ];
        let merged = compile_station_info(
            &rows,
            &LayerGraphs {
                provisional: ONTO,
                labeling: LABELING,
            },
            &lookup(),
        );
        assert_eq!(merged.get("hasShortName"), Some("label"));
        assert_eq!(merged.get("hasLat"), Some("56.1"));
        assert_eq!(merged.get("hasLongName"), None);
    }

    #[test]
    fn merged_record_serializes_with_provenance() {
        let base = vec![triple("hasLat", "56.1")];
        let value = serde_json::to_value(merge(&base, &none(), &lookup())).expect("serializes");
        assert_eq!(
            value,
            serde_json::json!({"hasLat": {"value": "56.1", "provenance": "provisional"}})
        );
    }
}
