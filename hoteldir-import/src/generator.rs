//! Placeholder hotel generation.
//!
//! Produces plausible hotels for a city without any external data source.
//! Output depends only on the city name and the requested count, so the same
//! command always generates the same hotels.

use hoteldir_catalog::types::*;
use hoteldir_db::operations;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rusqlite::Connection;

use crate::progress::ImportProgress;
use crate::seed::{
    ImportError, ImportStats, category_or_create, city_or_create, insert_hotel_once, log_import,
};

/// Cities used when none are given.
pub const DEFAULT_CITIES: &[&str] = &[
    "Casablanca",
    "Marrakech",
    "Rabat",
    "Fez",
    "Tangier",
    "Agadir",
    "Essaouira",
    "Chefchaouen",
];

pub const DEFAULT_PER_CITY: usize = 10;

struct Profile {
    category: &'static str,
    description: &'static str,
    prefixes: &'static [&'static str],
    price: (f64, f64),
    rating: (f64, f64),
    amenities: &'static str,
}

const PROFILES: &[Profile] = &[
    Profile {
        category: "Luxury Resort",
        description: "High-end resorts with premium amenities",
        prefixes: &["Palais", "Royal", "Grand"],
        price: (300.0, 600.0),
        rating: (4.5, 5.0),
        amenities: "Spa, Pool, Fine Dining, Concierge, WiFi",
    },
    Profile {
        category: "Boutique Hotel",
        description: "Small stylish hotels with unique character",
        prefixes: &["Maison", "Villa", "Dar"],
        price: (90.0, 250.0),
        rating: (4.0, 4.8),
        amenities: "Rooftop Terrace, Breakfast, WiFi",
    },
    Profile {
        category: "Business Hotel",
        description: "Hotels catering to business travelers",
        prefixes: &["Hotel", "City Center"],
        price: (120.0, 300.0),
        rating: (3.8, 4.6),
        amenities: "Meeting Rooms, Business Center, Gym, WiFi",
    },
    Profile {
        category: "Budget Hotel",
        description: "Affordable accommodation options",
        prefixes: &["Hostel", "Auberge", "Hotel"],
        price: (25.0, 80.0),
        rating: (3.0, 4.0),
        amenities: "WiFi, 24h Reception",
    },
    Profile {
        category: "Riad",
        description: "Traditional Moroccan houses converted into hotels",
        prefixes: &["Riad"],
        price: (70.0, 220.0),
        rating: (4.0, 4.9),
        amenities: "Courtyard, Traditional Breakfast, Hammam, WiFi",
    },
    Profile {
        category: "Heritage Hotel",
        description: "Historic properties with cultural significance",
        prefixes: &["Kasbah", "Palais"],
        price: (150.0, 400.0),
        rating: (4.2, 4.9),
        amenities: "Guided Tours, Restaurant, Garden, WiFi",
    },
];

const NAME_WORDS: &[&str] = &[
    "Atlas", "Zitoun", "Andalous", "Yasmine", "Majorelle", "Sahara", "Menara", "Bahia", "Saadi",
    "Argan", "Amazigh", "Nour", "Zahra", "Safran", "Oasis", "Kenzi", "Mogador", "Tamraght",
];

const STREETS: &[&str] = &[
    "Avenue Mohammed V",
    "Boulevard Hassan II",
    "Rue de la Liberté",
    "Derb Sidi Ahmed",
    "Avenue des FAR",
];

/// Build `count` placeholder hotels for `city`. Nothing is written.
pub fn placeholder_hotels(city: &str, count: usize) -> Vec<CatalogHotel> {
    let mut rng = StdRng::seed_from_u64(city_seed(city));
    let mut words = NAME_WORDS.to_vec();
    words.shuffle(&mut rng);

    (0..count)
        .map(|i| {
            let profile = &PROFILES[rng.gen_range(0..PROFILES.len())];
            let prefix = profile.prefixes[rng.gen_range(0..profile.prefixes.len())];
            let word = words[i % words.len()];
            let street = STREETS[rng.gen_range(0..STREETS.len())];

            // Each (word, round) pair occurs once, so names never repeat.
            let name = match i / words.len() {
                0 => format!("{prefix} {word}"),
                1 => format!("{prefix} {word} {city}"),
                round => format!("{prefix} {word} {city} {}", round + 1),
            };
            let price = rng.gen_range(profile.price.0..=profile.price.1).round();
            let rating = (rng.gen_range(profile.rating.0..=profile.rating.1) * 10.0).round() / 10.0;

            CatalogHotel {
                description: Some(format!(
                    "A {} in the heart of {city}.",
                    profile.category.to_lowercase()
                )),
                address: Some(format!("{} {street}, {city}", rng.gen_range(1..=250))),
                rating,
                price_per_night: price,
                amenities: Some(profile.amenities.to_string()),
                image_url: None,
                is_available: true,
                city: city.to_string(),
                category: profile.category.to_string(),
                name,
            }
        })
        .collect()
}

/// Generate and insert `per_city` placeholder hotels for each city.
///
/// Missing cities and categories are created. Hotels whose name already
/// exists in the city are skipped, as is every hotel of a city whose name
/// is not valid.
pub fn generate_hotels(
    conn: &Connection,
    cities: &[String],
    per_city: usize,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    let tx = conn.unchecked_transaction()?;

    let total = cities.len() * per_city;
    let mut done = 0;
    for city in cities {
        if let Some(p) = progress {
            p.on_phase(&format!("Generating {per_city} hotels in {city}"));
        }
        let Some(city_id) = city_or_create(&tx, city, &mut stats)? else {
            stats.skipped += per_city as u64;
            done += per_city;
            continue;
        };

        for hotel in placeholder_hotels(city, per_city) {
            done += 1;
            if let Some(p) = progress {
                p.on_record(done, total, &hotel.name);
            }
            if operations::find_hotel_in_city(&tx, &hotel.name, city_id)?.is_some() {
                log::debug!("Hotel '{}' already exists in {city}, skipping", hotel.name);
                stats.skipped += 1;
                continue;
            }

            let profile = PROFILES
                .iter()
                .find(|p| p.category == hotel.category)
                .map(|p| p.description)
                .unwrap_or_default();
            let category_id = category_or_create(&tx, &hotel.category, profile, &mut stats)?;
            insert_hotel_once(&tx, &hotel.to_new_hotel(city_id, category_id), &mut stats)?;
        }
    }

    log_import(&tx, "generated", &cities.join(", "), &stats)?;
    tx.commit()?;

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Generated {} hotels ({} skipped)",
            stats.hotels_created, stats.skipped
        ));
    }
    Ok(stats)
}

// FNV-1a, so the seed does not depend on the std hasher.
fn city_seed(city: &str) -> u64 {
    city.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = placeholder_hotels("Fez", 5);
        let b = placeholder_hotels("Fez", 5);
        let names_a: Vec<_> = a.iter().map(|h| &h.name).collect();
        let names_b: Vec<_> = b.iter().map(|h| &h.name).collect();
        assert_eq!(names_a, names_b);
        assert_eq!(a[0].price_per_night, b[0].price_per_night);
    }

    #[test]
    fn generated_values_are_valid() {
        for hotel in placeholder_hotels("Agadir", 40) {
            let new_hotel = hotel.to_new_hotel(1, 1);
            assert!(new_hotel.validate().is_ok(), "{hotel:?}");
            assert_eq!(hotel.city, "Agadir");
            assert!(PROFILES.iter().any(|p| p.category == hotel.category));
        }
    }

    #[test]
    fn names_unique_past_word_list() {
        for count in [NAME_WORDS.len(), 2 * NAME_WORDS.len() + 1, 60] {
            let hotels = placeholder_hotels("Rabat", count);
            let mut names: Vec<_> = hotels.iter().map(|h| h.name.clone()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), count);
        }
    }
}
