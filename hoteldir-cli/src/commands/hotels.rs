use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hoteldir_catalog::{FEATURED_LIMIT, HotelFilter};

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::commands::{
    PlaceNames, log_hotel_header, log_hotel_rows, open_existing_catalog, query_error,
};

/// List available hotels matching every given criterion.
pub(crate) fn run_hotels_search(db_path: &Path, args: FilterArgs) -> Result<(), CliError> {
    let conn = open_existing_catalog(db_path)?;
    let filter = HotelFilter::from(args);
    let hotels = hoteldir_db::search_hotels(&conn, &filter).map_err(query_error)?;
    let names = PlaceNames::load(&conn)?;

    if hotels.is_empty() {
        if filter.is_empty() {
            log::info!("No hotels available.");
        } else {
            log::info!("No hotels match the given filters.");
        }
        return Ok(());
    }

    log_hotel_header();
    log_hotel_rows(&hotels, &names);
    crate::log_blank();
    log::info!("{} hotel(s)", hotels.len());
    Ok(())
}

pub(crate) fn run_hotels_featured(db_path: &Path) -> Result<(), CliError> {
    let conn = open_existing_catalog(db_path)?;
    let hotels = hoteldir_db::featured_hotels(&conn, FEATURED_LIMIT).map_err(query_error)?;
    let names = PlaceNames::load(&conn)?;

    log::info!("{}", "Featured Hotels".if_supports_color(Stdout, |t| t.bold()));
    if hotels.is_empty() {
        log::info!("  No hotels available.");
        return Ok(());
    }
    crate::log_blank();
    log_hotel_header();
    log_hotel_rows(&hotels, &names);
    Ok(())
}

/// Show every field of one hotel.
pub(crate) fn run_hotels_show(db_path: &Path, id: i64) -> Result<(), CliError> {
    let conn = open_existing_catalog(db_path)?;
    let hotel = hoteldir_db::get_hotel(&conn, id)
        .map_err(query_error)?
        .ok_or_else(|| CliError::usage(format!("Hotel {id} not found")))?;
    let names = PlaceNames::load(&conn)?;

    log::info!(
        "{} {}",
        hotel.name.if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", hotel.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !hotel.is_available {
        log::info!(
            "  {} this hotel is not currently listed",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    log::info!(
        "  {} / {}",
        names.city(hotel.city_id),
        names.category(hotel.category_id)
    );
    log::info!("  Rating:     {:.1} / 5", hotel.rating);
    log::info!("  Price:      {:.2} per night", hotel.price_per_night);
    if let Some(address) = &hotel.address {
        log::info!("  Address:    {address}");
    }
    if let Some(amenities) = &hotel.amenities {
        log::info!("  Amenities:  {amenities}");
    }
    if let Some(url) = &hotel.image_url {
        log::info!("  Image:      {url}");
    }
    log::info!("  Added:      {}", hotel.created_at);
    if let Some(description) = &hotel.description {
        crate::log_blank();
        log::info!("  {description}");
    }
    Ok(())
}
