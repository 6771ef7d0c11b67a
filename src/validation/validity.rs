use serde::{Serialize, Serializer};

/// Outcome of validating one candidate value.
///
/// Only the error list is stored, so `is_valid() == errors().is_empty()`
/// cannot be violated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validity {
    errors: Vec<String>,
}

impl Validity {
    /// Returns a passing result. Every call yields a fresh value.
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    /// Returns a failing result carrying a single message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Returns a result carrying the given messages, passing if there are none.
    #[must_use]
    pub fn from_errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Combines results: valid only if all are, errors concatenated in order.
    #[must_use]
    pub fn aggregate(validities: impl IntoIterator<Item = Validity>) -> Self {
        validities.into_iter().collect()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl FromIterator<Validity> for Validity {
    fn from_iter<T: IntoIterator<Item = Validity>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().flat_map(Validity::into_errors).collect(),
        }
    }
}

impl Serialize for Validity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            valid: bool,
            errors: &'a [String],
        }

        Wire {
            valid: self.is_valid(),
            errors: &self.errors,
        }
        .serialize(serializer)
    }
}
