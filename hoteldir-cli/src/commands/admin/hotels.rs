use rusqlite::Connection;

use hoteldir_catalog::{Hotel, NewHotel, User};

use crate::CliError;
use crate::cli_types::{AdminHotelAction, HotelEditArgs, NewHotelArgs};
use crate::commands::{PlaceNames, log_hotel_header, log_hotel_rows, query_error};

use super::log_done;

pub(super) fn run(conn: &Connection, actor: &User, action: AdminHotelAction) -> Result<(), CliError> {
    match action {
        AdminHotelAction::List => {
            let hotels = hoteldir_db::list_hotels(conn).map_err(query_error)?;
            let names = PlaceNames::load(conn)?;
            log_hotel_header();
            log_hotel_rows(&hotels, &names);
            crate::log_blank();
            log::info!("{} hotel(s)", hotels.len());
            Ok(())
        }
        AdminHotelAction::Add(args) => {
            let hotel = hoteldir_db::create_hotel(conn, actor, &new_hotel(args))?;
            log_done(&format!("Added hotel '{}' (#{})", hotel.name, hotel.id));
            Ok(())
        }
        AdminHotelAction::Edit { id, fields } => {
            let current = hoteldir_db::get_hotel(conn, id)
                .map_err(query_error)?
                .ok_or(hoteldir_db::MutationError::NotFound { entity: "hotel", id })?;
            let hotel = hoteldir_db::edit_hotel(conn, actor, id, &merge_edit(&current, fields))?;
            log_done(&format!("Updated hotel '{}'", hotel.name));
            Ok(())
        }
        AdminHotelAction::Delete { id } => {
            let hotel = hoteldir_db::delete_hotel(conn, actor, id)?;
            log_done(&format!("Deleted hotel '{}'", hotel.name));
            Ok(())
        }
        AdminHotelAction::Toggle { id } => {
            let hotel = hoteldir_db::toggle_hotel_availability(conn, actor, id)?;
            let state = if hotel.is_available {
                "available"
            } else {
                "unavailable"
            };
            log_done(&format!("'{}' is now {state}", hotel.name));
            Ok(())
        }
    }
}

fn new_hotel(args: NewHotelArgs) -> NewHotel {
    NewHotel {
        name: args.name,
        description: args.description,
        address: args.address,
        rating: args.rating,
        price_per_night: args.price,
        amenities: args.amenities,
        image_url: args.image_url,
        is_available: !args.unavailable,
        city_id: args.city_id,
        category_id: args.category_id,
    }
}

/// Overlay the given fields on the hotel's current values.
fn merge_edit(current: &Hotel, fields: HotelEditArgs) -> NewHotel {
    NewHotel {
        name: fields.name.unwrap_or_else(|| current.name.clone()),
        description: fields.description.or_else(|| current.description.clone()),
        address: fields.address.or_else(|| current.address.clone()),
        rating: fields.rating.unwrap_or(current.rating),
        price_per_night: fields.price.unwrap_or(current.price_per_night),
        amenities: fields.amenities.or_else(|| current.amenities.clone()),
        image_url: fields.image_url.or_else(|| current.image_url.clone()),
        is_available: current.is_available,
        city_id: fields.city_id.unwrap_or(current.city_id),
        category_id: fields.category_id.unwrap_or(current.category_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riad() -> Hotel {
        Hotel {
            id: 3,
            name: "Riad Yasmine".to_string(),
            description: Some("Courtyard pool".to_string()),
            address: None,
            rating: 4.5,
            price_per_night: 120.0,
            amenities: Some("WiFi, Pool".to_string()),
            image_url: None,
            is_available: false,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            city_id: 1,
            category_id: 2,
        }
    }

    #[test]
    fn empty_edit_keeps_everything() {
        let current = riad();
        let merged = merge_edit(&current, HotelEditArgs::default());
        assert_eq!(merged.name, current.name);
        assert_eq!(merged.description, current.description);
        assert_eq!(merged.rating, 4.5);
        assert_eq!(merged.price_per_night, 120.0);
        assert!(!merged.is_available);
        assert_eq!((merged.city_id, merged.category_id), (1, 2));
    }

    #[test]
    fn given_fields_replace_current_values() {
        let fields = HotelEditArgs {
            price: Some(0.0),
            address: Some("Derb Lalla Azzouna".to_string()),
            city_id: Some(4),
            ..Default::default()
        };
        let merged = merge_edit(&riad(), fields);
        assert_eq!(merged.price_per_night, 0.0);
        assert_eq!(merged.address.as_deref(), Some("Derb Lalla Azzouna"));
        assert_eq!(merged.city_id, 4);
        assert_eq!(merged.amenities.as_deref(), Some("WiFi, Pool"));
    }

    #[test]
    fn new_hotel_flag_marks_unavailable() {
        let args = NewHotelArgs {
            name: "Dar Anika".to_string(),
            city_id: 1,
            category_id: 1,
            price: 90.0,
            rating: 0.0,
            address: None,
            description: None,
            amenities: None,
            image_url: None,
            unavailable: true,
        };
        let hotel = new_hotel(args);
        assert!(!hotel.is_available);
        assert_eq!(hotel.price_per_night, 90.0);
    }
}
