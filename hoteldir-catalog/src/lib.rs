//! Hotel catalog data model types, field validation, and YAML seed loading.
//!
//! This crate defines the persistent data model for the hotel directory without
//! any database dependencies. Consumers can use these types directly for
//! serialization, display, or passing to `hoteldir-db` for persistence.

pub mod types;
pub mod validate;
pub mod yaml;

pub use types::*;
pub use validate::ValidationError;
pub use yaml::{SeedData, YamlError, load_categories, load_cities, load_hotels, load_seed_data, load_users};
