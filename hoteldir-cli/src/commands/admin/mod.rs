//! Admin commands. Every command authenticates the acting user first and
//! passes them to the mutation layer, which refuses non-admins.

mod categories;
mod cities;
mod hotels;
mod users;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use hoteldir_catalog::User;

use crate::CliError;
use crate::cli_types::{AdminAction, AdminArgs};
use crate::commands::{
    PlaceNames, log_hotel_header, log_hotel_rows, open_existing_catalog, query_error,
    require_password,
};

/// Hotels shown in the dashboard's "recent" section.
const DASHBOARD_RECENT: u32 = 5;

pub(crate) fn run_admin(db_path: &Path, args: AdminArgs) -> Result<(), CliError> {
    let password = require_password(args.password)?;
    let conn = open_existing_catalog(db_path)?;
    let actor = hoteldir_db::authenticate(&conn, &args.user, &password)?;
    hoteldir_db::require_admin(&actor)?;
    log::debug!("Acting as admin '{}'", actor.username);

    match args.action {
        AdminAction::Dashboard => run_dashboard(&conn),
        AdminAction::Cities { action } => cities::run(&conn, &actor, action),
        AdminAction::Categories { action } => categories::run(&conn, &actor, action),
        AdminAction::Hotels { action } => hotels::run(&conn, &actor, action),
        AdminAction::Users { action } => users::run(&conn, &actor, action),
    }
}

fn run_dashboard(conn: &Connection) -> Result<(), CliError> {
    let stats = hoteldir_db::catalog_stats(conn).map_err(query_error)?;
    let recent = hoteldir_db::recent_hotels(conn, DASHBOARD_RECENT).map_err(query_error)?;
    let per_city = hoteldir_db::hotels_per_city(conn).map_err(query_error)?;
    let per_category = hoteldir_db::hotels_per_category(conn).map_err(query_error)?;
    let names = PlaceNames::load(conn)?;

    log::info!("{}", "Dashboard".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  Users: {}  Hotels: {} ({} available)  Cities: {}  Categories: {}",
        stats.users,
        stats.hotels,
        stats.available_hotels,
        stats.cities,
        stats.categories,
    );

    crate::log_blank();
    log::info!("{}", "Recent Hotels".if_supports_color(Stdout, |t| t.bold()));
    if recent.is_empty() {
        log::info!("  None yet.");
    } else {
        log_hotel_header();
        log_hotel_rows(&recent, &names);
    }

    for (title, groups) in [("Hotels per City", per_city), ("Hotels per Category", per_category)] {
        crate::log_blank();
        log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
        for group in &groups {
            log::info!("  {:<24} {:>5}", group.name, group.hotels);
        }
    }
    Ok(())
}

/// Green check followed by a message.
fn log_done(message: &str) {
    log::info!(
        "{} {message}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
}

/// Warn if the acting user is about to remove their own admin access.
fn warn_if_self_demoted(actor: &User, id: i64, admin: Option<bool>) {
    if actor.id == id && admin == Some(false) {
        log::warn!("You are removing your own admin access");
    }
}
