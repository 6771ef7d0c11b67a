//! Station labeling: layered graph resolution, the station listing and the
//! edit state of station forms.

pub mod aggregator;
pub mod directory;
pub mod form;
pub mod resolver;
pub mod rows;
pub mod service;
pub mod status;
pub mod theme;

pub use aggregator::{first_values, group_by, group_by_subject, SubjectGroups};
pub use directory::{summarize_stations, StationSummary};
pub use form::{FormError, StationForm, StationRecord};
pub use resolver::{
    compile_station_info, merge, merge_with_fallback, LayerGraphs, MergedRecord, MergedValue,
    PropertyLookup, Provenance,
};
pub use rows::{StationFile, StationPiRow, Triple};
pub use service::{
    DataSourceError, DataSourceHandle, LabelingError, LabelingService, StationDataSource,
    StationInfo,
};
pub use status::{ApplicationStatus, Severity, StatusError};
pub use theme::Theme;
