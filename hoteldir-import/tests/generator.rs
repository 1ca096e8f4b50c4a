use hoteldir_db::*;
use hoteldir_import::*;

fn cities(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn generates_requested_count_per_city() {
    let conn = open_memory().unwrap();
    let stats = generate_hotels(&conn, &cities(&["Fez", "Oujda"]), 5, None).unwrap();

    assert_eq!(stats.cities_created, 2);
    assert_eq!(stats.hotels_created, 10);
    assert_eq!(stats.skipped, 0);
    assert_eq!(catalog_stats(&conn).unwrap().hotels, 10);

    let logs = list_import_logs(&conn, None).unwrap();
    assert_eq!(logs[0].source_type, "generated");
    assert_eq!(logs[0].source_name, "Fez, Oujda");
}

#[test]
fn rerun_skips_name_collisions() {
    let conn = open_memory().unwrap();
    generate_hotels(&conn, &cities(&["Tangier"]), 4, None).unwrap();
    let again = generate_hotels(&conn, &cities(&["Tangier"]), 4, Some(&SilentProgress)).unwrap();

    assert_eq!(again.hotels_created, 0);
    assert_eq!(again.skipped, 4);
    assert_eq!(again.cities_created, 0);
    assert_eq!(catalog_stats(&conn).unwrap().hotels, 4);
}

#[test]
fn generated_hotels_match_preview() {
    let conn = open_memory().unwrap();
    generate_hotels(&conn, &cities(&["Essaouira"]), 3, None).unwrap();

    let city = find_city_by_name(&conn, "Essaouira").unwrap().unwrap();
    for preview in placeholder_hotels("Essaouira", 3) {
        let stored = find_hotel_in_city(&conn, &preview.name, city.id)
            .unwrap()
            .unwrap();
        assert_eq!(stored.price_per_night, preview.price_per_night);
        assert_eq!(stored.rating, preview.rating);
        let category = get_category(&conn, stored.category_id).unwrap().unwrap();
        assert_eq!(category.name, preview.category);
    }
}

#[test]
fn default_city_list_is_not_empty() {
    assert!(!DEFAULT_CITIES.is_empty());
    assert!(DEFAULT_PER_CITY > 0);
}

#[test]
fn large_counts_are_fully_generated() {
    let conn = open_memory().unwrap();
    let stats = generate_hotels(&conn, &cities(&["Fez"]), 60, None).unwrap();

    assert_eq!(stats.hotels_created, 60);
    assert_eq!(stats.skipped, 0);
    assert_eq!(catalog_stats(&conn).unwrap().hotels, 60);
}

#[test]
fn invalid_city_name_generates_nothing() {
    let conn = open_memory().unwrap();
    let long = "Q".repeat(120);
    let stats = generate_hotels(&conn, &cities(&[long.as_str(), "Ifrane"]), 3, None).unwrap();

    assert_eq!(stats.cities_created, 1);
    assert_eq!(stats.hotels_created, 3);
    assert_eq!(stats.skipped, 3);
    assert!(find_city_by_name(&conn, &long).unwrap().is_none());
}
