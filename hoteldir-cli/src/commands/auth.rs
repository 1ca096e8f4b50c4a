use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hoteldir_catalog::{NewUser, is_admin};

use crate::CliError;
use crate::cli_types::PasswordArgs;
use crate::commands::{open_catalog, open_existing_catalog, require_password};

/// Self-registration. The new account is never an admin.
pub(crate) fn run_register(
    db_path: &Path,
    username: String,
    email: String,
    password: PasswordArgs,
) -> Result<(), CliError> {
    let password = require_password(password)?;
    let conn = open_catalog(db_path)?;

    let user = hoteldir_db::register_user(&conn, &NewUser::new(username, email, password))?;

    log::info!(
        "{} Registered '{}' (user #{})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        user.username.if_supports_color(Stdout, |t| t.bold()),
        user.id,
    );
    Ok(())
}

pub(crate) fn run_login(
    db_path: &Path,
    username: &str,
    password: PasswordArgs,
) -> Result<(), CliError> {
    let password = require_password(password)?;
    let conn = open_existing_catalog(db_path)?;

    let user = hoteldir_db::authenticate(&conn, username, &password)?;
    let role = if is_admin(&user) { "admin" } else { "user" };

    log::info!(
        "{} Logged in as '{}' ({role})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        user.username.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Email: {}", user.email);
    Ok(())
}
