//! Persistent CLI settings and database path resolution.
//!
//! The settings file is `~/.config/hoteldir/settings.toml`. Only the
//! `catalog.database` key is read; other keys are preserved on write.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/hoteldir/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("hoteldir").join("settings.toml")
}

/// Database used when neither `--db` nor the settings file names one.
pub(crate) fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("hoteldir").join("catalog.db")
}

/// Seed dataset directory used when `--catalog-dir` is not given.
pub(crate) fn default_catalog_dir() -> PathBuf {
    PathBuf::from("catalog")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.database` in `settings.toml`
/// 3. `<data dir>/hoteldir/catalog.db`
pub(crate) fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_database_path_with(cli_override, &settings_path())
}

fn resolve_database_path_with(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_database_path(settings) {
        return p;
    }
    default_database_path()
}

/// Read `catalog.database` from a settings file, if set.
fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let db = doc.get("catalog")?.get("database")?.as_str()?;
    if db.is_empty() {
        None
    } else {
        Some(PathBuf::from(db))
    }
}

/// Save the default database path in `settings.toml`.
pub(crate) fn save_database_path(path: &Path) -> io::Result<()> {
    save_database_path_to(&settings_path(), path)
}

fn save_database_path_to(settings: &Path, path: &Path) -> io::Result<()> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .map_err(|e| io::Error::other(format!("{} is not valid TOML: {e}", settings.display())))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;
    catalog.insert(
        "database".to_string(),
        toml::Value::String(path.to_string_lossy().into_owned()),
    );

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cli_override_wins() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        save_database_path_to(&settings, Path::new("/saved.db")).unwrap();

        let resolved = resolve_database_path_with(Some(PathBuf::from("/flag.db")), &settings);
        assert_eq!(resolved, PathBuf::from("/flag.db"));
    }

    #[test]
    fn saved_path_used_without_override() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("nested").join("settings.toml");
        save_database_path_to(&settings, Path::new("/saved.db")).unwrap();

        assert_eq!(
            resolve_database_path_with(None, &settings),
            PathBuf::from("/saved.db")
        );
    }

    #[test]
    fn falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("missing.toml");
        assert_eq!(
            resolve_database_path_with(None, &settings),
            default_database_path()
        );
    }

    #[test]
    fn save_preserves_other_keys() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "[display]\ncolor = false\n").unwrap();

        save_database_path_to(&settings, Path::new("/a.db")).unwrap();
        save_database_path_to(&settings, Path::new("/b.db")).unwrap();

        let doc: toml::Value = std::fs::read_to_string(&settings)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(doc["display"]["color"].as_bool(), Some(false));
        assert_eq!(doc["catalog"]["database"].as_str(), Some("/b.db"));
        assert!(!settings.with_extension("toml.tmp").exists());
    }

    #[test]
    fn refuses_to_overwrite_broken_settings() {
        let tmp = TempDir::new().unwrap();
        let settings = tmp.path().join("settings.toml");
        std::fs::write(&settings, "not [valid").unwrap();
        assert!(save_database_path_to(&settings, Path::new("/a.db")).is_err());
    }
}
