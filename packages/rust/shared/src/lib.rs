//! Shared types, error model, and configuration for NomadPlan.
//!
//! This crate is the foundation depended on by all other NomadPlan crates.
//! It provides:
//! - [`NomadError`]: the unified error type
//! - Domain types ([`Destination`], [`CoworkingSpace`], [`Trip`], [`User`], [`Itinerary`])
//! - Configuration ([`AppConfig`], [`ApiConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    API_URL_ENV, ApiConfig, AppConfig, DefaultsConfig, apply_env_overrides,
    apply_env_overrides_from, config_dir, config_file_path, init_config, load_config,
    load_config_from, log_file_path, validate_base_url,
};
pub use error::{NomadError, Result};
pub use types::{
    Activity, ActivityType, Coordinates, CoworkingSpace, Destination, Itinerary,
    PreferenceCategory, Preferences, Trip, TripDestination, TripStatus, User, WorkType,
};
