//! Application configuration, read from a YAML file.
//!
//! ```yaml
//! logger:
//!   enable: true
//!   level: info
//!   format: compact
//! labeling:
//!   base_uri: "http://meta.icos-cp.eu/ontologies/stationentry/"
//!   provisional_graph: "http://meta.icos-cp.eu/ontologies/stationentry/"
//!   labeling_graph: "http://meta.icos-cp.eu/resources/stationlabeling/"
//!   themes:
//!     atmosphere:
//!       owl_class: "http://meta.icos-cp.eu/ontologies/stationentry/AS"
//!       properties: [hasShortName, hasLongName]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::labeling::{LayerGraphs, PropertyLookup, Theme};
use crate::logger::{Format, LogLevel};

const STATION_ENTRY: &str = "http://meta.icos-cp.eu/ontologies/stationentry/";
const STATION_LABELING: &str = "http://meta.icos-cp.eu/resources/stationlabeling/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Root configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct Config {
    #[serde(default)]
    pub logger: Logger,
    #[serde(default)]
    #[validate(nested)]
    pub labeling: LabelingSettings,
}

impl Config {
    /// Parses and validates configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error when the YAML is malformed or fails validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or its content is
    /// invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }
}

/// Logger configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Logger {
    /// Enable log write to stdout
    pub enable: bool,

    /// Set the logger level.
    ///
    /// * options: `trace` | `debug` | `info` | `warn` | `error`
    #[serde(default)]
    pub level: LogLevel,

    /// Set the logger format.
    ///
    /// * options: `compact` | `pretty` | `json`
    #[serde(default)]
    pub format: Format,

    /// Override our custom tracing filter.
    ///
    /// Set this to your own filter if you want to see traces from internal
    /// libraries. See more [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives)
    pub override_filter: Option<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            enable: true,
            level: LogLevel::default(),
            format: Format::default(),
            override_filter: None,
        }
    }
}

/// Properties a theme's station form edits, and the OWL class its stations
/// are typed with.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeSettings {
    pub owl_class: String,
    pub properties: Vec<String>,
}

/// Graph layout of the labeling triple store.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct LabelingSettings {
    /// Namespace every station property lives under.
    #[validate(length(min = 1))]
    pub base_uri: String,
    /// Graph holding provisional registration data.
    #[validate(length(min = 1))]
    pub provisional_graph: String,
    /// Graph holding data edited during labeling.
    #[validate(length(min = 1))]
    pub labeling_graph: String,
    #[validate(custom(function = "validate_themes"))]
    pub themes: BTreeMap<Theme, ThemeSettings>,
}

impl Default for LabelingSettings {
    fn default() -> Self {
        let theme = |class: &str, extra: &[&str]| {
            let mut properties: Vec<String> =
                COMMON_PROPERTIES.iter().map(ToString::to_string).collect();
            properties.extend(extra.iter().map(ToString::to_string));
            ThemeSettings {
                owl_class: format!("{STATION_ENTRY}{class}"),
                properties,
            }
        };
        Self {
            base_uri: STATION_ENTRY.to_string(),
            provisional_graph: STATION_ENTRY.to_string(),
            labeling_graph: STATION_LABELING.to_string(),
            themes: BTreeMap::from([
                (
                    Theme::Atmosphere,
                    theme("AS", &["hasElevationAboveGround", "hasElevationAboveSea"]),
                ),
                (
                    Theme::Ecosystem,
                    theme("ES", &["hasEcosystemType", "hasElevationAboveSea"]),
                ),
                (Theme::Ocean, theme("OS", &["hasPlatformType"])),
            ]),
        }
    }
}

fn validate_themes(themes: &BTreeMap<Theme, ThemeSettings>) -> Result<(), ValidationError> {
    if themes
        .values()
        .any(|theme| theme.owl_class.is_empty() || theme.properties.is_empty())
    {
        return Err(ValidationError::new("theme_incomplete"));
    }
    Ok(())
}

const COMMON_PROPERTIES: [&str; 8] = [
    "hasShortName",
    "hasLongName",
    "hasLat",
    "hasLon",
    "hasAddress",
    "hasWebsite",
    "hasStationClass",
    "hasApplicationStatus",
];

impl LabelingSettings {
    /// Theme of stations typed with `owl_class`.
    #[must_use]
    pub fn theme_of(&self, owl_class: &str) -> Option<Theme> {
        self.themes
            .iter()
            .find(|(_, settings)| settings.owl_class == owl_class)
            .map(|(theme, _)| *theme)
    }

    /// Predicate lookup of the properties edited for `theme`.
    #[must_use]
    pub fn property_lookup(&self, theme: Theme) -> Option<PropertyLookup> {
        self.themes
            .get(&theme)
            .map(|settings| PropertyLookup::new(&self.base_uri, settings.properties.iter().cloned()))
    }

    #[must_use]
    pub fn graphs(&self) -> LayerGraphs<'_> {
        LayerGraphs {
            provisional: &self.provisional_graph,
            labeling: &self.labeling_graph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_theme() {
        let settings = LabelingSettings::default();
        for theme in Theme::ALL {
            let lookup = settings.property_lookup(theme).expect("configured");
            assert_eq!(
                lookup.name_of(&format!("{STATION_ENTRY}hasShortName")),
                Some("hasShortName")
            );
        }
        assert_eq!(
            settings.theme_of("http://meta.icos-cp.eu/ontologies/stationentry/OS"),
            Some(Theme::Ocean)
        );
        assert_eq!(settings.theme_of("http://example.org/Other"), None);
    }

    #[test]
    fn parses_yaml_with_defaults() {
        let config = Config::from_yaml_str(
            r#"
labeling:
  base_uri: "http://example.org/onto/"
  provisional_graph: "http://example.org/onto/"
  labeling_graph: "http://example.org/labeling/"
  themes:
    ocean:
      owl_class: "http://example.org/onto/OS"
      properties: [hasShortName]
"#,
        )
        .expect("valid config");

        assert!(config.logger.enable);
        assert_eq!(config.logger.level, LogLevel::Info);
        assert_eq!(config.labeling.themes.len(), 1);
        assert!(config.labeling.property_lookup(Theme::Atmosphere).is_none());
        assert_eq!(config.labeling.graphs().labeling, "http://example.org/labeling/");
    }

    #[test]
    fn rejects_empty_graph_names() {
        let err = Config::from_yaml_str(
            r#"
labeling:
  base_uri: "http://example.org/onto/"
  provisional_graph: ""
  labeling_graph: "http://example.org/labeling/"
  themes: {}
"#,
        )
        .expect_err("empty graph");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_theme_without_properties() {
        let err = Config::from_yaml_str(
            r#"
labeling:
  base_uri: "http://example.org/onto/"
  provisional_graph: "http://example.org/onto/"
  labeling_graph: "http://example.org/labeling/"
  themes:
    ocean:
      owl_class: "http://example.org/onto/OS"
      properties: []
"#,
        )
        .expect_err("no properties");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn reports_missing_file() {
        let err = Config::from_file("does/not/exist.yaml").expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
