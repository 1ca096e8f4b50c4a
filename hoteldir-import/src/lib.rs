//! Load hotel data into the catalog database.
//!
//! This crate owns the offline data paths: seeding from the YAML dataset,
//! importing hotels from CSV, and generating placeholder hotels. Every run
//! is recorded in the import log.

pub mod csv_import;
pub mod generator;
pub mod progress;
pub mod seed;

pub use csv_import::{FALLBACK_CATEGORY, import_csv, normalize_rating};
pub use generator::{DEFAULT_CITIES, DEFAULT_PER_CITY, generate_hotels, placeholder_hotels};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use seed::{ImportError, ImportStats, log_import, reset_catalog, seed_catalog};
