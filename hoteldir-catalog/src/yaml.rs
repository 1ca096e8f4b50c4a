//! YAML loading for the human-curated seed dataset.
//!
//! Loads cities, categories, seed accounts, and hotels from the `catalog/`
//! directory.

use crate::types::{CatalogHotel, NewCategory, NewCity, NewUser};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Everything loaded by [`load_seed_data`].
#[derive(Debug, Default)]
pub struct SeedData {
    pub cities: Vec<NewCity>,
    pub categories: Vec<NewCategory>,
    pub users: Vec<NewUser>,
    pub hotels: Vec<CatalogHotel>,
}

impl SeedData {
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
            && self.categories.is_empty()
            && self.users.is_empty()
            && self.hotels.is_empty()
    }
}

/// Load the city list from a single YAML file. A missing file yields no cities.
pub fn load_cities(path: &Path) -> Result<Vec<NewCity>, YamlError> {
    load_yaml_list(path)
}

/// Load the category list from a single YAML file.
pub fn load_categories(path: &Path) -> Result<Vec<NewCategory>, YamlError> {
    load_yaml_list(path)
}

/// Load seed accounts from a single YAML file.
pub fn load_users(path: &Path) -> Result<Vec<NewUser>, YamlError> {
    load_yaml_list(path)
}

/// Load all hotel definitions from YAML files in a directory.
///
/// Each `.yaml` file should contain a YAML sequence of `CatalogHotel` entries.
/// Files are read in name order, so hotels keep a stable insertion order.
pub fn load_hotels(dir: &Path) -> Result<Vec<CatalogHotel>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut all = Vec::new();
    for entry in entries {
        all.extend(load_yaml_list::<CatalogHotel>(&entry.path())?);
    }
    Ok(all)
}

/// Load the whole seed dataset from the standard directory layout.
///
/// Expected structure:
/// ```text
/// catalog_dir/
///   cities.yaml
///   categories.yaml
///   users.yaml
///   hotels/
///     casablanca.yaml
///     marrakech.yaml
///     ...
/// ```
pub fn load_seed_data(catalog_dir: &Path) -> Result<SeedData, YamlError> {
    if !catalog_dir.is_dir() {
        return Err(YamlError::DirNotFound(catalog_dir.display().to_string()));
    }
    Ok(SeedData {
        cities: load_cities(&catalog_dir.join("cities.yaml"))?,
        categories: load_categories(&catalog_dir.join("categories.yaml"))?,
        users: load_users(&catalog_dir.join("users.yaml"))?,
        hotels: load_hotels(&catalog_dir.join("hotels"))?,
    })
}

/// Generic helper: load a YAML file containing a sequence of `T`.
fn load_yaml_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, YamlError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    // An empty file deserializes as null rather than an empty sequence.
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
