use std::fs;
use std::path::{Path, PathBuf};

use hoteldir_catalog::types::*;
use hoteldir_db::*;
use hoteldir_import::*;
use tempfile::TempDir;

fn shipped_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../catalog")
}

fn small_catalog() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("cities.yaml"), "- name: Fez\n- name: Rabat\n").unwrap();
    fs::write(
        dir.join("categories.yaml"),
        "- name: Riad\n  description: Traditional house\n",
    )
    .unwrap();
    fs::write(
        dir.join("users.yaml"),
        "- username: admin\n  email: admin@hotel.com\n  password: admin123\n  is_admin: true\n",
    )
    .unwrap();
    fs::create_dir(dir.join("hotels")).unwrap();
    fs::write(
        dir.join("hotels").join("fez.yaml"),
        r#"
- name: Riad Fes
  city: Fez
  category: Riad
  rating: 4.4
  price_per_night: 180.0
- name: Lost Riad
  city: Atlantis
  category: Riad
  price_per_night: 10.0
- name: Riad Fes
  city: Fez
  category: Riad
  price_per_night: 99.0
"#,
    )
    .unwrap();
    tmp
}

#[test]
fn seed_small_catalog() {
    let conn = open_memory().unwrap();
    let tmp = small_catalog();

    let stats = seed_catalog(&conn, tmp.path(), false, None).unwrap();
    assert_eq!(stats.cities_created, 2);
    assert_eq!(stats.categories_created, 1);
    assert_eq!(stats.users_created, 1);
    assert_eq!(stats.hotels_created, 1);
    // Unknown city and the duplicate name in the same city.
    assert_eq!(stats.skipped, 2);

    let riad = search_hotels(&conn, &HotelFilter::default()).unwrap();
    assert_eq!(riad.len(), 1);
    assert_eq!(riad[0].price_per_night, 180.0);

    let admin = authenticate(&conn, "admin", "admin123").unwrap();
    assert!(admin.is_admin);
    assert_ne!(admin.password_hash, "admin123");
}

#[test]
fn seeding_twice_skips_existing() {
    let conn = open_memory().unwrap();
    let tmp = small_catalog();

    seed_catalog(&conn, tmp.path(), false, None).unwrap();
    let before = catalog_stats(&conn).unwrap();

    let stats = seed_catalog(&conn, tmp.path(), false, Some(&SilentProgress)).unwrap();
    assert_eq!(stats.records_created(), 0);
    assert_eq!(catalog_stats(&conn).unwrap(), before);
}

#[test]
fn reseed_with_reset_gives_same_counts() {
    let conn = open_memory().unwrap();
    let tmp = small_catalog();

    seed_catalog(&conn, tmp.path(), false, None).unwrap();
    let before = catalog_stats(&conn).unwrap();

    let stats = seed_catalog(&conn, tmp.path(), true, Some(&LogProgress)).unwrap();
    assert_eq!(stats.hotels_created, 1);
    assert_eq!(catalog_stats(&conn).unwrap(), before);

    // Ids restart after a reset.
    assert_eq!(find_city_by_name(&conn, "Fez").unwrap().unwrap().id, 1);
}

#[test]
fn every_run_is_logged() {
    let conn = open_memory().unwrap();
    let tmp = small_catalog();

    seed_catalog(&conn, tmp.path(), false, None).unwrap();
    seed_catalog(&conn, tmp.path(), false, None).unwrap();

    let logs = list_import_logs(&conn, None).unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.source_type == "seed"));
    let first = logs.iter().find(|l| l.records_created > 0).unwrap();
    assert_eq!(first.records_created, 5);
    assert_eq!(first.records_skipped, 2);
}

#[test]
fn reset_keeps_import_history() {
    let conn = open_memory().unwrap();
    let tmp = small_catalog();
    seed_catalog(&conn, tmp.path(), false, None).unwrap();

    reset_catalog(&conn).unwrap();
    let stats = catalog_stats(&conn).unwrap();
    assert_eq!(stats.hotels, 0);
    assert_eq!(stats.users, 0);
    assert_eq!(stats.cities, 0);
    assert_eq!(list_import_logs(&conn, None).unwrap().len(), 1);
}

#[test]
fn missing_catalog_dir_fails_without_writing() {
    let conn = open_memory().unwrap();
    let tmp = TempDir::new().unwrap();
    let result = seed_catalog(&conn, &tmp.path().join("nope"), false, None);
    assert!(matches!(result, Err(ImportError::Yaml(_))));
    assert!(list_import_logs(&conn, None).unwrap().is_empty());
}

#[test]
fn shipped_catalog_seeds_cleanly() {
    let conn = open_memory().unwrap();
    let stats = seed_catalog(&conn, &shipped_catalog(), false, None).unwrap();
    assert_eq!(stats.skipped, 0);

    let totals = catalog_stats(&conn).unwrap();
    assert_eq!(totals.cities, 10);
    assert_eq!(totals.categories, 8);
    assert_eq!(totals.users, 2);
    assert_eq!(totals.hotels, 13);
    assert_eq!(totals.available_hotels, 13);

    let featured = featured_hotels(&conn, FEATURED_LIMIT).unwrap();
    assert_eq!(featured.len(), FEATURED_LIMIT);
    assert_eq!(featured[0].name, "La Mamounia");

    let filter = HotelFilter {
        min_rating: Some(4.5),
        ..Default::default()
    };
    let names: Vec<_> = search_hotels(&conn, &filter)
        .unwrap()
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(names[0], "La Mamounia");
    assert!(!names.contains(&"Riad Yasmine".to_string()));

    let guest = authenticate(&conn, "testuser", "user123").unwrap();
    assert!(!guest.is_admin);
}
