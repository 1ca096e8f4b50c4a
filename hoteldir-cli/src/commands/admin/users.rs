use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use hoteldir_catalog::{NewUser, User, UserUpdate};

use crate::CliError;
use crate::cli_types::UserAction;
use crate::commands::{query_error, truncate_str};

use super::{log_done, warn_if_self_demoted};

pub(super) fn run(conn: &Connection, actor: &User, action: UserAction) -> Result<(), CliError> {
    match action {
        UserAction::List => {
            let users = hoteldir_db::list_users(conn).map_err(query_error)?;
            log::info!(
                "{}",
                format!("  {:>4}  {:<20} {:<30} {:<6} {}", "ID", "Username", "Email", "Role", "Joined")
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            for user in &users {
                let role = if user.is_admin { "admin" } else { "user" };
                log::info!(
                    "  {:>4}  {:<20} {:<30} {:<6} {}",
                    user.id,
                    truncate_str(&user.username, 20),
                    truncate_str(&user.email, 30),
                    role,
                    user.created_at,
                );
            }
            Ok(())
        }
        UserAction::Add {
            username,
            email,
            new_password,
            admin,
        } => {
            let mut new_user = NewUser::new(username, email, new_password);
            if admin {
                new_user = new_user.admin();
            }
            let user = hoteldir_db::create_user(conn, actor, &new_user)?;
            log_done(&format!("Added user '{}' (#{})", user.username, user.id));
            Ok(())
        }
        UserAction::Edit {
            id,
            username,
            email,
            new_password,
            admin,
        } => {
            let current = hoteldir_db::get_user(conn, id)
                .map_err(query_error)?
                .ok_or(hoteldir_db::MutationError::NotFound { entity: "user", id })?;
            warn_if_self_demoted(actor, id, admin);

            let mut update = UserUpdate::from_user(&current);
            if let Some(username) = username {
                update.username = username;
            }
            if let Some(email) = email {
                update.email = email;
            }
            if let Some(admin) = admin {
                update.is_admin = admin;
            }
            update.password = new_password;

            let user = hoteldir_db::edit_user(conn, actor, id, &update)?;
            log_done(&format!("Updated user '{}'", user.username));
            Ok(())
        }
        UserAction::Delete { id } => {
            let user = hoteldir_db::delete_user(conn, actor, id)?;
            log_done(&format!("Deleted user '{}'", user.username));
            Ok(())
        }
    }
}
