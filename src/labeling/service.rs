use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::directory::{summarize_stations, StationSummary};
use super::resolver::{compile_station_info, MergedRecord};
use super::rows::{StationFile, StationPiRow, Triple};
use super::theme::Theme;
use crate::config::LabelingSettings;
use crate::ontology::Iri;

/// Read access to the station triple store.
#[async_trait]
pub trait StationDataSource {
    /// Associated error type allowing infrastructure specific failures.
    type Error;

    /// Every assertion about `station` in the provisional and labeling
    /// graphs, each row carrying its graph name.
    async fn station_triples(&self, station: &Iri) -> Result<Vec<Triple>, Self::Error>;

    /// Files attached to the station's application.
    async fn station_files(&self, station: &Iri) -> Result<Vec<StationFile>, Self::Error>;

    /// Station listing rows, one per station and PI email.
    async fn station_pis(&self) -> Result<Vec<StationPiRow>, Self::Error>;
}

/// Shared handle to a station data source.
pub type DataSourceHandle = dyn StationDataSource<Error = DataSourceError> + Send + Sync + 'static;

/// Failures reported by a station data source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("station query failed: {0}")]
    Query(String),
    #[error("could not decode query results")]
    Decode(#[from] serde_json::Error),
    #[error("station data source unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by [`LabelingService`].
#[derive(Debug, Error)]
pub enum LabelingError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    #[error("no properties configured for theme '{0}'")]
    UnknownTheme(Theme),
}

/// Everything a station form is opened with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    pub station_uri: Iri,
    pub theme: Theme,
    pub files: Vec<StationFile>,
    pub properties: MergedRecord,
}

/// Fetches and assembles station labeling data.
#[derive(Clone)]
pub struct LabelingService {
    source: Arc<DataSourceHandle>,
    settings: LabelingSettings,
}

impl LabelingService {
    #[must_use]
    pub fn new(source: Arc<DataSourceHandle>, settings: LabelingSettings) -> Self {
        Self { source, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &LabelingSettings {
        &self.settings
    }

    /// Loads the merged property record and the files of one station.
    ///
    /// Triples and files are fetched concurrently; the first failure aborts
    /// the whole operation and nothing is merged.
    ///
    /// # Errors
    ///
    /// Returns [`LabelingError::UnknownTheme`] when `theme` has no configured
    /// properties, or the data source error of the first failing fetch.
    pub async fn station_info(
        &self,
        station: &Iri,
        theme: Theme,
    ) -> Result<StationInfo, LabelingError> {
        let lookup = self
            .settings
            .property_lookup(theme)
            .ok_or(LabelingError::UnknownTheme(theme))?;

        debug!(station = %station, theme = %theme, "station_info_fetch_started");
        let (triples, files) = try_join(
            self.source.station_triples(station),
            self.source.station_files(station),
        )
        .await
        .map_err(|error| {
            warn!(station = %station, err.msg = %error, "station_info_fetch_failed");
            error
        })?;

        let properties = compile_station_info(&triples, &self.settings.graphs(), &lookup);
        info!(
            station = %station,
            triples = triples.len(),
            files = files.len(),
            properties = properties.len(),
            "station_info_compiled"
        );

        Ok(StationInfo {
            station_uri: station.clone(),
            theme,
            files,
            properties,
        })
    }

    /// Lists every station with its PIs and current names.
    ///
    /// # Errors
    ///
    /// Returns the data source error when the listing query fails.
    pub async fn stations(&self) -> Result<Vec<StationSummary>, LabelingError> {
        let rows = self.source.station_pis().await.map_err(|error| {
            warn!(err.msg = %error, "station_listing_failed");
            error
        })?;
        let summaries = summarize_stations(rows, &self.settings);
        info!(stations = summaries.len(), "station_listing_compiled");
        Ok(summaries)
    }
}
