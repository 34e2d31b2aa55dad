//! Error handling types and utilities.
//!
//! The ranking engine itself never fails. Errors only come from reading
//! catalogs and configuration off disk.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for inventory-rank operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the binary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a catalog dump fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file is not a recognized JSON catalog shape.
    #[error("Failed to parse catalog at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Catalog JSON from a non-file source is malformed.
    #[error("Invalid catalog JSON")]
    Json(#[from] serde_json::Error),
}

/// Error returned when loading ranking configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config TOML")]
    Toml(#[from] toml::de::Error),
}
