use std::collections::BTreeMap;

use thiserror::Error;

use crate::validation::Validity;

/// Station property values keyed by logical property name.
pub type StationRecord = BTreeMap<String, String>;

/// Edit state of one station form.
///
/// The form is an immutable value: every field update returns a new form.
/// Comparing two forms structurally tells whether an update changed anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationForm {
    station: StationRecord,
    original: StationRecord,
    errors: BTreeMap<String, Vec<String>>,
    editable: bool,
}

impl StationForm {
    /// Opens a form on a freshly fetched record.
    #[must_use]
    pub fn new(record: StationRecord, editable: bool) -> Self {
        Self {
            station: record.clone(),
            original: record,
            errors: BTreeMap::new(),
            editable,
        }
    }

    /// Applies one field delta: the validity of the edited value and the
    /// value itself.
    #[must_use]
    pub fn with_field(&self, name: &str, validity: Validity, value: impl Into<String>) -> Self {
        let mut next = self.clone();

        let errors = validity.into_errors();
        if errors.is_empty() {
            next.errors.remove(name);
        } else {
            next.errors.insert(name.to_string(), errors);
        }

        let value = value.into();
        if next.station.get(name) != Some(&value) {
            next.station.insert(name.to_string(), value);
        }

        next
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.station.get(name).map(String::as_str)
    }

    /// Current errors of a field.
    #[must_use]
    pub fn errors(&self, name: &str) -> &[String] {
        self.errors.get(name).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// `true` while the record equals the one the form was opened with.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.station == self.original
    }

    #[must_use]
    pub fn can_save(&self) -> bool {
        self.save_candidate().is_ok()
    }

    /// Returns the record to submit, or why it may not be submitted yet.
    pub fn save_candidate(&self) -> Result<&StationRecord, FormError> {
        if !self.editable {
            return Err(FormError::ReadOnly);
        }
        if self.is_unchanged() {
            return Err(FormError::Unchanged);
        }
        if !self.is_valid() {
            return Err(FormError::Invalid {
                fields: self.errors.keys().cloned().collect(),
            });
        }
        Ok(&self.station)
    }
}

/// Reasons a station form cannot be submitted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("station is not editable by the current user")]
    ReadOnly,
    #[error("station has no unsaved changes")]
    Unchanged,
    #[error("invalid values in fields: {}", .fields.join(", "))]
    Invalid { fields: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> StationRecord {
        BTreeMap::from([
            ("hasShortName".to_string(), "HTM".to_string()),
            ("hasLat".to_string(), "56.1".to_string()),
        ])
    }

    #[test]
    fn unchanged_update_yields_an_equal_form() {
        let form = StationForm::new(record(), true);
        let next = form.with_field("hasShortName", Validity::ok(), "HTM");
        assert_eq!(next, form);
        assert_eq!(form.save_candidate(), Err(FormError::Unchanged));
    }

    #[test]
    fn valid_change_can_be_saved() {
        let form = StationForm::new(record(), true);
        let next = form.with_field("hasShortName", Validity::ok(), "HTM2");
        assert!(form.value("hasShortName") == Some("HTM"));
        assert_eq!(next.value("hasShortName"), Some("HTM2"));
        assert!(next.can_save());
        assert_eq!(
            next.save_candidate().map(|record| record.get("hasShortName").cloned()),
            Ok(Some("HTM2".to_string()))
        );
    }

    #[test]
    fn invalid_field_blocks_saving_until_fixed() {
        let form = StationForm::new(record(), true);
        let broken = form.with_field("hasLat", Validity::error("Not a number!"), "north");
        assert!(!broken.is_valid());
        assert_eq!(broken.errors("hasLat"), ["Not a number!"]);
        assert_eq!(
            broken.save_candidate(),
            Err(FormError::Invalid {
                fields: vec!["hasLat".into()]
            })
        );

        let fixed = broken.with_field("hasLat", Validity::ok(), "56.2");
        assert!(fixed.is_valid());
        assert!(fixed.errors("hasLat").is_empty());
        assert!(fixed.can_save());
    }

    #[test]
    fn reverting_a_change_marks_form_unchanged() {
        let form = StationForm::new(record(), true);
        let reverted = form
            .with_field("hasShortName", Validity::ok(), "X")
            .with_field("hasShortName", Validity::ok(), "HTM");
        assert!(reverted.is_unchanged());
        assert!(!reverted.can_save());
    }

    #[test]
    fn read_only_forms_never_save() {
        let form = StationForm::new(record(), false).with_field("hasShortName", Validity::ok(), "X");
        assert!(!form.is_editable());
        assert_eq!(form.save_candidate(), Err(FormError::ReadOnly));
    }
}
