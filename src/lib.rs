//! Station labeling core.
//!
//! Turns ontology schemas and RDF triples into render-ready station views:
//! ordered property groups for individuals, validators compiled from declared
//! value ranges, and station records merged from a provisional and a labeling
//! graph.

pub use self::errors::Error;

pub mod config;
pub mod errors;
pub mod labeling;
pub mod logger;
pub mod ontology;
pub mod validation;
pub mod view_model;

/// Application results options list
pub type Result<T, E = Error> = std::result::Result<T, E>;
