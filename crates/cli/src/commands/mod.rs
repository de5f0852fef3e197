//! CLI subcommands.

pub mod seed;
pub mod status;

use secrecy::SecretString;
use thiserror::Error;

use nexora_api::Store;
use nexora_api::db::StoreError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The store could not be opened.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The content bundle could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The content bundle is not valid.
    #[error("Invalid content bundle: {0}")]
    Bundle(#[from] serde_yaml::Error),
}

/// Open the store named by `DATABASE_URL`.
///
/// Unlike the API, the CLI refuses to run without a configured store.
pub fn open_store() -> Result<Store, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar("DATABASE_URL"))?;

    match Store::connect(Some(&database_url)) {
        Store::Unavailable { reason } => Err(CliError::StoreUnavailable(reason)),
        store => Ok(store),
    }
}
