use hoteldir_catalog::types::*;
use hoteldir_db::operations::{
    count_hotels_in_category, count_hotels_in_city, delete_city, delete_hotel,
    set_hotel_availability, update_hotel, update_user,
};
use hoteldir_db::*;

fn setup_places(conn: &rusqlite::Connection) -> (i64, i64) {
    let city = insert_city(conn, &NewCity::new("Marrakech", DEFAULT_COUNTRY)).unwrap();
    let category = insert_category(
        conn,
        &NewCategory::new("Riad", Some("Traditional Moroccan house")),
    )
    .unwrap();
    (city, category)
}

#[test]
fn city_crud() {
    let conn = open_memory().unwrap();
    let id = insert_city(&conn, &NewCity::new("Fez", DEFAULT_COUNTRY)).unwrap();

    let city = get_city(&conn, id).unwrap().unwrap();
    assert_eq!(city.name, "Fez");
    assert_eq!(city.country, "Morocco");
    assert!(!city.created_at.is_empty());

    assert_eq!(find_city_by_name(&conn, "Fez").unwrap().unwrap().id, id);
    // Name lookup is case-sensitive.
    assert!(find_city_by_name(&conn, "fez").unwrap().is_none());

    delete_city(&conn, id).unwrap();
    assert!(get_city(&conn, id).unwrap().is_none());
    assert!(matches!(
        delete_city(&conn, id),
        Err(OperationError::NotFound { entity_type: "city", .. })
    ));
}

#[test]
fn city_names_are_unique() {
    let conn = open_memory().unwrap();
    insert_city(&conn, &NewCity::new("Rabat", DEFAULT_COUNTRY)).unwrap();
    assert!(insert_city(&conn, &NewCity::new("Rabat", DEFAULT_COUNTRY)).is_err());
}

#[test]
fn category_keeps_description() {
    let conn = open_memory().unwrap();
    let (_, category) = setup_places(&conn);
    let found = find_category_by_name(&conn, "Riad").unwrap().unwrap();
    assert_eq!(found.id, category);
    assert_eq!(
        found.description.as_deref(),
        Some("Traditional Moroccan house")
    );
    assert!(get_category(&conn, 999).unwrap().is_none());
}

#[test]
fn hotel_crud_and_counts() {
    let conn = open_memory().unwrap();
    let (city, category) = setup_places(&conn);

    let mut hotel = NewHotel::new("Riad Yasmine", city, category, 120.0).with_rating(4.3);
    hotel.amenities = Some("WiFi, Pool".to_string());
    let id = insert_hotel(&conn, &hotel).unwrap();

    let stored = get_hotel(&conn, id).unwrap().unwrap();
    assert_eq!(stored.name, "Riad Yasmine");
    assert_eq!(stored.rating, 4.3);
    assert_eq!(stored.amenities.as_deref(), Some("WiFi, Pool"));
    assert!(stored.is_available);
    assert_eq!(count_hotels_in_city(&conn, city).unwrap(), 1);
    assert_eq!(count_hotels_in_category(&conn, category).unwrap(), 1);

    assert_eq!(
        find_hotel_in_city(&conn, "Riad Yasmine", city)
            .unwrap()
            .unwrap()
            .id,
        id
    );

    update_hotel(&conn, id, &hotel.clone().with_rating(4.6)).unwrap();
    let updated = get_hotel(&conn, id).unwrap().unwrap();
    assert_eq!(updated.rating, 4.6);
    assert_eq!(updated.created_at, stored.created_at);

    set_hotel_availability(&conn, id, false).unwrap();
    assert!(!get_hotel(&conn, id).unwrap().unwrap().is_available);

    delete_hotel(&conn, id).unwrap();
    assert_eq!(count_hotels_in_city(&conn, city).unwrap(), 0);
    assert!(matches!(
        set_hotel_availability(&conn, id, true),
        Err(OperationError::NotFound { .. })
    ));
}

#[test]
fn foreign_keys_block_deleting_owner() {
    let conn = open_memory().unwrap();
    let (city, category) = setup_places(&conn);
    insert_hotel(&conn, &NewHotel::new("Riad Yasmine", city, category, 120.0)).unwrap();

    assert!(matches!(
        delete_city(&conn, city),
        Err(OperationError::Sqlite(_))
    ));
    assert!(get_city(&conn, city).unwrap().is_some());
}

#[test]
fn user_update_keeps_hash_unless_given() {
    let conn = open_memory().unwrap();
    let id = insert_user(&conn, "alice", "alice@hotel.com", "hash-one", false).unwrap();

    update_user(&conn, id, "alice2", "alice2@hotel.com", true, None).unwrap();
    let user = get_user(&conn, id).unwrap().unwrap();
    assert_eq!(user.username, "alice2");
    assert!(user.is_admin);
    assert_eq!(user.password_hash, "hash-one");

    update_user(&conn, id, "alice2", "alice2@hotel.com", true, Some("hash-two")).unwrap();
    let user = find_user_by_email(&conn, "alice2@hotel.com").unwrap().unwrap();
    assert_eq!(user.password_hash, "hash-two");

    assert!(find_user_by_username(&conn, "alice").unwrap().is_none());
}

#[test]
fn usernames_and_emails_are_unique() {
    let conn = open_memory().unwrap();
    insert_user(&conn, "alice", "alice@hotel.com", "h", false).unwrap();
    assert!(insert_user(&conn, "alice", "other@hotel.com", "h", false).is_err());
    assert!(insert_user(&conn, "bob", "alice@hotel.com", "h", false).is_err());
}
