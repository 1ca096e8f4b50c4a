//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use hoteldir_catalog::{DEFAULT_COUNTRY, HotelFilter};

#[derive(Parser)]
#[command(name = "hoteldir")]
#[command(about = "Browse and administer a hotel directory", long_about = None)]
pub(crate) struct Cli {
    /// Path to the catalog database (overrides the settings file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create, seed and inspect the catalog database
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Browse available hotels
    Hotels {
        #[command(subcommand)]
        action: HotelsAction,
    },

    /// Register an account or check credentials
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Administer the catalog (requires an admin account)
    Admin(AdminArgs),

    /// Manage hoteldir settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Password input shared by every command that needs one.
#[derive(Args, Clone)]
pub(crate) struct PasswordArgs {
    /// Account password
    #[arg(long, env = "HOTELDIR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

// ── Catalog ─────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum CatalogAction {
    /// Create an empty catalog database
    Init,

    /// Load the YAML seed dataset
    Seed {
        /// Directory containing cities.yaml, categories.yaml, users.yaml and hotels/
        #[arg(long)]
        catalog_dir: Option<PathBuf>,

        /// Delete all existing cities, categories, hotels and users first
        #[arg(long)]
        reset: bool,
    },

    /// Import hotels from a CSV file
    ImportCsv {
        /// CSV file with a header row
        file: PathBuf,
    },

    /// Generate placeholder hotels for the given cities
    Generate {
        /// City names, comma-separated (default: a built-in list of Moroccan cities)
        #[arg(value_delimiter = ',')]
        cities: Vec<String>,

        /// Hotels to generate per city
        #[arg(short, long, default_value_t = hoteldir_import::DEFAULT_PER_CITY)]
        limit: usize,
    },

    /// Show catalog database statistics
    Stats,

    /// Show recent import runs
    Imports {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Delete the catalog database
    Reset {
        /// Confirm deletion (required)
        #[arg(long)]
        confirm: bool,
    },
}

// ── Hotels ──────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum HotelsAction {
    /// Search available hotels, best rated first
    Search(FilterArgs),

    /// Show the featured hotels
    Featured,

    /// Show one hotel in full
    Show {
        /// Hotel ID
        id: i64,
    },
}

#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive substring of the hotel name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only hotels in this city
    #[arg(long)]
    pub city_id: Option<i64>,

    /// Only hotels in this category
    #[arg(long)]
    pub category_id: Option<i64>,

    /// Minimum price per night
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price per night
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating (0-5)
    #[arg(long)]
    pub min_rating: Option<f64>,
}

impl From<FilterArgs> for HotelFilter {
    fn from(args: FilterArgs) -> Self {
        HotelFilter {
            search: args.search,
            city_id: args.city_id,
            category_id: args.category_id,
            min_price: args.min_price,
            max_price: args.max_price,
            min_rating: args.min_rating,
        }
    }
}

// ── Auth ────────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum AuthAction {
    /// Create a regular user account
    Register {
        username: String,
        email: String,
        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Check a username and password
    Login {
        username: String,
        #[command(flatten)]
        password: PasswordArgs,
    },
}

// ── Admin ───────────────────────────────────────────────────────────────────

#[derive(Args)]
pub(crate) struct AdminArgs {
    /// Admin username to act as
    #[arg(short, long)]
    pub user: String,

    #[command(flatten)]
    pub password: PasswordArgs,

    #[command(subcommand)]
    pub action: AdminAction,
}

#[derive(Subcommand)]
pub(crate) enum AdminAction {
    /// Show totals, recent hotels and per-city/category counts
    Dashboard,

    /// Manage cities
    Cities {
        #[command(subcommand)]
        action: CityAction,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage hotels
    Hotels {
        #[command(subcommand)]
        action: AdminHotelAction,
    },

    /// Manage user accounts
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CityAction {
    /// List cities by name
    List,
    /// Add a city
    Add {
        name: String,
        #[arg(long, default_value = DEFAULT_COUNTRY)]
        country: String,
    },
    /// Delete a city that has no hotels
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum CategoryAction {
    /// List categories by name
    List,
    /// Add a category
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a category that has no hotels
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum AdminHotelAction {
    /// List all hotels, newest first
    List,
    /// Add a hotel
    Add(NewHotelArgs),
    /// Change fields of a hotel; omitted fields keep their value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: HotelEditArgs,
    },
    /// Delete a hotel
    Delete { id: i64 },
    /// Flip a hotel between available and unavailable
    Toggle { id: i64 },
}

#[derive(Args)]
pub(crate) struct NewHotelArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub city_id: i64,
    #[arg(long)]
    pub category_id: i64,
    /// Price per night
    #[arg(long)]
    pub price: f64,
    #[arg(long, default_value_t = 0.0)]
    pub rating: f64,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Free-text amenities, e.g. "WiFi, Pool, Spa"
    #[arg(long)]
    pub amenities: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
    /// Create the hotel as unavailable
    #[arg(long)]
    pub unavailable: bool,
}

#[derive(Args, Default)]
pub(crate) struct HotelEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub city_id: Option<i64>,
    #[arg(long)]
    pub category_id: Option<i64>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub rating: Option<f64>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub amenities: Option<String>,
    #[arg(long)]
    pub image_url: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum UserAction {
    /// List users, newest first
    List,
    /// Create a user account
    Add {
        username: String,
        email: String,
        /// Password for the new account
        #[arg(long)]
        new_password: String,
        /// Grant admin access
        #[arg(long)]
        admin: bool,
    },
    /// Change a user's details; omitted fields keep their value
    Edit {
        id: i64,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Replace the password
        #[arg(long)]
        new_password: Option<String>,
        /// Grant or revoke admin access
        #[arg(long)]
        admin: Option<bool>,
    },
    /// Delete a user account
    Delete { id: i64 },
}

// ── Config ──────────────────────────────────────────────────────────────────

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved database path
    Show,

    /// Save the default database path
    SetDb {
        /// Database file to use by default
        path: PathBuf,
    },

    /// Print the settings file path
    Path,
}
