use serde::Serialize;

use super::aggregator::group_by;
use super::rows::StationPiRow;
use super::status::{ApplicationStatus, StatusError};
use super::theme::Theme;
use crate::config::LabelingSettings;

/// One station of the labeling listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSummary {
    pub station_uri: String,
    pub theme: Option<Theme>,
    /// PI emails in row order.
    pub emails: Vec<String>,
    pub short_name: String,
    pub long_name: String,
    pub application_status: Option<String>,
}

impl StationSummary {
    /// Decoded application status; stations without one never submitted.
    pub fn status(&self) -> Result<ApplicationStatus, StatusError> {
        ApplicationStatus::from_optional(self.application_status.as_deref())
    }

    /// Returns `true` if `email` belongs to one of the station's PIs.
    #[must_use]
    pub fn has_pi(&self, email: &str) -> bool {
        self.emails.iter().any(|candidate| candidate == email)
    }
}

/// Collapses listing rows, one per station and PI email, into summaries.
///
/// Stations keep their first-appearance order. Names come from the labeling
/// layer when present and fall back to the provisional registration names;
/// other columns are read from the station's first row.
pub fn summarize_stations(
    rows: impl IntoIterator<Item = StationPiRow>,
    settings: &LabelingSettings,
) -> Vec<StationSummary> {
    group_by(rows, |row| row.station.as_str())
        .into_iter()
        .filter_map(|(station_uri, rows)| {
            let first = rows.first()?;
            Some(StationSummary {
                theme: settings.theme_of(&first.owl_class),
                emails: rows.iter().map(|row| row.email.clone()).collect(),
                short_name: first
                    .short_name
                    .clone()
                    .unwrap_or_else(|| first.prov_short_name.clone()),
                long_name: first
                    .long_name
                    .clone()
                    .unwrap_or_else(|| first.prov_long_name.clone()),
                application_status: first.application_status.clone(),
                station_uri,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(station: &str, email: &str) -> StationPiRow {
        StationPiRow {
            station: format!("http://example.org/st/{station}"),
            owl_class: "http://meta.icos-cp.eu/ontologies/stationentry/AS".into(),
            pi: format!("http://example.org/pi/{email}"),
            email: email.into(),
            prov_short_name: station.into(),
            prov_long_name: format!("{station} provisional"),
            ..StationPiRow::default()
        }
    }

    #[test]
    fn collects_emails_per_station() {
        let rows = vec![
            row("HTM", "a@example.org"),
            row("SMR", "c@example.org"),
            row("HTM", "b@example.org"),
        ];
        let summaries = summarize_stations(rows, &LabelingSettings::default());
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].station_uri, "http://example.org/st/HTM");
        assert_eq!(summaries[0].emails, vec!["a@example.org", "b@example.org"]);
        assert!(summaries[0].has_pi("b@example.org"));
        assert_eq!(summaries[0].theme, Some(Theme::Atmosphere));
        assert_eq!(summaries[1].emails, vec!["c@example.org"]);
    }

    #[test]
    fn labeling_names_override_provisional_ones() {
        let mut labeled = row("HTM", "a@example.org");
        labeled.short_name = Some("HTM-L".into());
        labeled.application_status = Some("submitted".into());
        let summaries =
            summarize_stations(vec![labeled, row("SMR", "c@example.org")], &LabelingSettings::default());

        assert_eq!(summaries[0].short_name, "HTM-L");
        assert_eq!(summaries[0].long_name, "HTM provisional");
        assert_eq!(summaries[0].status(), Ok(ApplicationStatus::Submitted));
        assert_eq!(summaries[1].short_name, "SMR");
        assert_eq!(summaries[1].status(), Ok(ApplicationStatus::NeverSubmitted));
    }

    #[test]
    fn unmapped_class_has_no_theme() {
        let mut unknown = row("XYZ", "x@example.org");
        unknown.owl_class = "http://example.org/onto/Unknown".into();
        let summaries = summarize_stations(vec![unknown], &LabelingSettings::default());
        assert_eq!(summaries[0].theme, None);
    }
}
