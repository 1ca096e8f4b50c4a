use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use hoteldir_catalog::{NewCity, User};

use crate::CliError;
use crate::cli_types::CityAction;
use crate::commands::query_error;

use super::log_done;

pub(super) fn run(conn: &Connection, actor: &User, action: CityAction) -> Result<(), CliError> {
    match action {
        CityAction::List => {
            let cities = hoteldir_db::list_cities(conn).map_err(query_error)?;
            log::info!(
                "{}",
                format!("  {:>4}  {:<24} {:<16}", "ID", "Name", "Country")
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            for city in &cities {
                log::info!("  {:>4}  {:<24} {:<16}", city.id, city.name, city.country);
            }
            Ok(())
        }
        CityAction::Add { name, country } => {
            let city = hoteldir_db::create_city(conn, actor, &NewCity::new(name, country))?;
            log_done(&format!("Added city '{}' (#{})", city.name, city.id));
            Ok(())
        }
        CityAction::Delete { id } => {
            let city = hoteldir_db::delete_city(conn, actor, id)?;
            log_done(&format!("Deleted city '{}'", city.name));
            Ok(())
        }
    }
}
