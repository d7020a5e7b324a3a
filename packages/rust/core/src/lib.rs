//! View logic for NomadPlan front ends.
//!
//! This crate ties the catalog data, the query pipeline, and the REST client
//! together into what the CLI and TUI render: featured destinations, detail
//! lookups, trip cards, and the profile editor.

pub mod cards;
pub mod catalog;
pub mod detail;
pub mod home;
pub mod profile;
pub mod trips;

pub use catalog::Catalog;
pub use detail::{DestinationDetail, destination_detail};
pub use profile::ProfileEditor;
