//! Raw result rows handed over by the station data source.

use serde::{Deserialize, Serialize};

/// One `(subject, predicate, object)` assertion, optionally scoped to a named
/// graph. Query bindings named `s`, `p`, `o`, `g` decode as well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    #[serde(alias = "s")]
    pub subject: String,
    #[serde(alias = "p")]
    pub predicate: String,
    #[serde(alias = "o")]
    pub object: String,
    #[serde(default, alias = "g")]
    pub graph: Option<String>,
}

impl Triple {
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: None,
        }
    }

    /// Scopes the triple to a named graph.
    #[must_use]
    pub fn in_graph(mut self, graph: impl Into<String>) -> Self {
        self.graph = Some(graph.into());
        self
    }
}

/// File attached to a station's labeling application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationFile {
    pub file: String,
    pub file_type: String,
    pub file_name: String,
}

/// Row of the station listing query: one row per station and PI email.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPiRow {
    #[serde(alias = "s")]
    pub station: String,
    pub owl_class: String,
    pub pi: String,
    pub email: String,
    pub prov_short_name: String,
    pub prov_long_name: String,
    #[serde(default, alias = "hasShortName")]
    pub short_name: Option<String>,
    #[serde(default, alias = "hasLongName")]
    pub long_name: Option<String>,
    #[serde(default, alias = "hasApplicationStatus")]
    pub application_status: Option<String>,
}
