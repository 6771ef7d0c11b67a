//! Render-ready views of ontology individuals.

pub mod individual;
pub mod property_values;

pub use individual::{build, Individual};
pub use property_values::PropertyValueGroup;
