use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or queried
    #[error("Database error: {0}")]
    Database(String),

    /// Import or seed run failed
    #[error("Import error: {0}")]
    Import(#[from] hoteldir_import::ImportError),

    /// Admin mutation was refused
    #[error("{0} [{code}]", code = .0.reason_code())]
    Rejected(#[from] hoteldir_db::MutationError),

    /// Login or registration failed
    #[error("{0}")]
    Auth(#[from] hoteldir_db::AuthError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Missing or inconsistent command-line input
    #[error("{0}")]
    Usage(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
