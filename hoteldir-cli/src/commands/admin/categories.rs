use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use hoteldir_catalog::{NewCategory, User};

use crate::CliError;
use crate::cli_types::CategoryAction;
use crate::commands::{query_error, truncate_str};

use super::log_done;

pub(super) fn run(conn: &Connection, actor: &User, action: CategoryAction) -> Result<(), CliError> {
    match action {
        CategoryAction::List => {
            let categories = hoteldir_db::list_categories(conn).map_err(query_error)?;
            log::info!(
                "{}",
                format!("  {:>4}  {:<20} {}", "ID", "Name", "Description")
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            for category in &categories {
                log::info!(
                    "  {:>4}  {:<20} {}",
                    category.id,
                    category.name,
                    truncate_str(category.description.as_deref().unwrap_or(""), 50),
                );
            }
            Ok(())
        }
        CategoryAction::Add { name, description } => {
            let category = hoteldir_db::create_category(
                conn,
                actor,
                &NewCategory::new(name, description.as_deref()),
            )?;
            log_done(&format!("Added category '{}' (#{})", category.name, category.id));
            Ok(())
        }
        CategoryAction::Delete { id } => {
            let category = hoteldir_db::delete_category(conn, actor, id)?;
            log_done(&format!("Deleted category '{}'", category.name));
            Ok(())
        }
    }
}
