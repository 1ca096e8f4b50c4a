use hoteldir_catalog::{
    DEFAULT_COUNTRY, YamlError, load_categories, load_cities, load_hotels, load_seed_data,
    load_users,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_cities_from_yaml() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "cities.yaml",
        r#"
- name: Casablanca
- name: Lisbon
  country: Portugal
"#,
    );

    let cities = load_cities(&tmp.path().join("cities.yaml")).unwrap();
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].name, "Casablanca");
    assert_eq!(cities[0].country, DEFAULT_COUNTRY);
    assert_eq!(cities[1].country, "Portugal");
}

#[test]
fn load_categories_from_yaml() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "categories.yaml",
        r#"
- name: Riad
  description: "Traditional Moroccan houses converted into hotels"
- name: Budget Hotel
"#,
    );

    let categories = load_categories(&tmp.path().join("categories.yaml")).unwrap();
    assert_eq!(categories.len(), 2);
    assert!(categories[0].description.is_some());
    assert_eq!(categories[1].description, None);
}

#[test]
fn load_users_keeps_admin_flag() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "users.yaml",
        r#"
- username: admin
  email: admin@hotel.com
  password: admin123
  is_admin: true
- username: testuser
  email: user@hotel.com
  password: user123
"#,
    );

    let users = load_users(&tmp.path().join("users.yaml")).unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0].is_admin);
    assert!(!users[1].is_admin);
    // Debug output never carries the plaintext password.
    assert!(!format!("{:?}", users[0]).contains("admin123"));
}

#[test]
fn load_hotels_in_file_name_order() {
    let tmp = TempDir::new().unwrap();
    let hotels_dir = tmp.path().join("hotels");
    fs::create_dir(&hotels_dir).unwrap();

    write_yaml(
        &hotels_dir,
        "marrakech.yaml",
        r#"
- name: La Mamounia
  city: Marrakech
  category: Luxury Resort
  rating: 4.9
  price_per_night: 450.0
- name: Riad Yasmine
  city: Marrakech
  category: Riad
  rating: 4.3
  price_per_night: 120.0
  is_available: false
"#,
    );
    write_yaml(
        &hotels_dir,
        "casablanca.yaml",
        r#"
- name: Hyatt Regency Casablanca
  city: Casablanca
  category: Business Hotel
  price_per_night: 280.0
"#,
    );
    write_yaml(&hotels_dir, "notes.txt", "not yaml");

    let hotels = load_hotels(&hotels_dir).unwrap();
    let names: Vec<_> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        ["Hyatt Regency Casablanca", "La Mamounia", "Riad Yasmine"]
    );
    assert_eq!(hotels[0].rating, 0.0);
    assert!(hotels[0].is_available);
    assert!(!hotels[2].is_available);
}

#[test]
fn missing_files_return_empty() {
    let tmp = TempDir::new().unwrap();
    assert!(load_cities(&tmp.path().join("cities.yaml")).unwrap().is_empty());
    assert!(load_hotels(&tmp.path().join("hotels")).unwrap().is_empty());

    let data = load_seed_data(tmp.path()).unwrap();
    assert!(data.is_empty());
}

#[test]
fn empty_file_is_empty_list() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "cities.yaml", "\n");
    assert!(load_cities(&tmp.path().join("cities.yaml")).unwrap().is_empty());
}

#[test]
fn missing_catalog_dir_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = load_seed_data(&tmp.path().join("nope"));
    assert!(matches!(result, Err(YamlError::DirNotFound(_))));
}

#[test]
fn malformed_yaml_names_the_file() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "cities.yaml", "- name: [unterminated\n");

    let err = load_cities(&tmp.path().join("cities.yaml")).unwrap_err();
    match err {
        YamlError::Parse { path, .. } => assert!(path.ends_with("cities.yaml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
