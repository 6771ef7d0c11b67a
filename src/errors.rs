//! Crate-wide error type.

use crate::{
    config::ConfigError,
    labeling::{FormError, LabelingError, StatusError},
    ontology::{IriError, OntologyError},
    validation::ValidatorError,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Iri(#[from] IriError),

    #[error(transparent)]
    Ontology(#[from] OntologyError),

    #[error(transparent)]
    Validator(#[from] ValidatorError),

    #[error(transparent)]
    Labeling(#[from] LabelingError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("cannot initialize logger: {0}")]
    Logger(String),

    #[error(transparent)]
    Any(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn wrap(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Any(Box::new(err))
    }

    pub fn msg(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Message(err.to_string())
    }

    #[must_use]
    pub fn string(s: &str) -> Self {
        Self::Message(s.to_string())
    }
}
