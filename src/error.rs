//! Error types
//!
//! Nothing here is fatal to the process. Callers decide whether to log,
//! ignore, or surface an error to the user.

use thiserror::Error;

use crate::basket::ItemId;

/// Errors raised by basket operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BasketError {
    /// The id is not in the catalog (input source bound to the wrong catalog)
    #[error("unknown item `{0}`")]
    UnknownItem(ItemId),
    /// The item has nothing left to remove
    #[error("no `{0}` left in the basket")]
    EmptyItem(ItemId),
}

/// Errors raised while building a catalog
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("item id must not be empty")]
    EmptyId,
    #[error("item `{0}` is defined more than once")]
    DuplicateItem(ItemId),
}

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: String,
    },
}

/// Errors raised while parsing a textual command
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("command `{0}` must start with `+` or `-`")]
    MissingSign(String),
    #[error("command `{0}` has no item id")]
    MissingItem(String),
}
