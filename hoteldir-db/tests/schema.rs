use hoteldir_db::open_memory;
use hoteldir_db::schema::{CURRENT_VERSION, TABLES, create_schema, get_schema_version, open_database};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in TABLES {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table {table} should exist");
    }
}

#[test]
fn open_database_creates_parent_dirs_and_reopens() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("catalog.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO cities (name) VALUES ('Rabat')", [])
            .unwrap();
    }
    assert!(path.exists());

    let conn = open_database(&path).unwrap();
    let (name, country): (String, String) = conn
        .query_row("SELECT name, country FROM cities", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(name, "Rabat");
    assert_eq!(country, "Morocco");
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn check_constraints_reject_bad_hotels() {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO cities (name) VALUES ('Fez');
         INSERT INTO categories (name) VALUES ('Riad');",
    )
    .unwrap();

    let bad_rating = conn.execute(
        "INSERT INTO hotels (name, rating, price_per_night, city_id, category_id)
         VALUES ('Too Good', 5.5, 100, 1, 1)",
        [],
    );
    assert!(bad_rating.is_err());

    let bad_price = conn.execute(
        "INSERT INTO hotels (name, rating, price_per_night, city_id, category_id)
         VALUES ('Paid To Stay', 3.0, -1, 1, 1)",
        [],
    );
    assert!(bad_price.is_err());

    let orphan = conn.execute(
        "INSERT INTO hotels (name, rating, price_per_night, city_id, category_id)
         VALUES ('Nowhere', 3.0, 10, 99, 1)",
        [],
    );
    assert!(orphan.is_err());
}
