//! hoteldir CLI
//!
//! Command-line interface for browsing and administering a hotel directory.

mod cli_types;
mod commands;
mod error;
mod logging;
mod progress;
mod settings;

use clap::Parser;

use cli_types::*;
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db_path = settings::resolve_database_path(cli.db);
    let quiet = cli.quiet;

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Init => commands::catalog::init::run_catalog_init(&db_path),
            CatalogAction::Seed { catalog_dir, reset } => {
                commands::catalog::seed::run_catalog_seed(&db_path, catalog_dir, reset, quiet)
            }
            CatalogAction::ImportCsv { file } => {
                commands::catalog::import::run_catalog_import_csv(&db_path, &file, quiet)
            }
            CatalogAction::Generate { cities, limit } => {
                commands::catalog::import::run_catalog_generate(&db_path, cities, limit, quiet)
            }
            CatalogAction::Stats => commands::catalog::stats::run_catalog_stats(&db_path),
            CatalogAction::Imports { limit } => {
                commands::catalog::stats::run_catalog_imports(&db_path, limit)
            }
            CatalogAction::Reset { confirm } => {
                commands::catalog::reset::run_catalog_reset(&db_path, confirm)
            }
        },
        Commands::Hotels { action } => match action {
            HotelsAction::Search(filter) => commands::hotels::run_hotels_search(&db_path, filter),
            HotelsAction::Featured => commands::hotels::run_hotels_featured(&db_path),
            HotelsAction::Show { id } => commands::hotels::run_hotels_show(&db_path, id),
        },
        Commands::Auth { action } => match action {
            AuthAction::Register {
                username,
                email,
                password,
            } => commands::auth::run_register(&db_path, username, email, password),
            AuthAction::Login { username, password } => {
                commands::auth::run_login(&db_path, &username, password)
            }
        },
        Commands::Admin(args) => commands::admin::run_admin(&db_path, args),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&db_path);
                Ok(())
            }
            ConfigAction::SetDb { path } => commands::config::run_config_set_db(&path),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}
