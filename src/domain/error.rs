//! Error types for the lanesift engine.
//!
//! This module defines the centralized error type [`LanesiftError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! The click-handling path itself is infallible: a click either applies fully
//! or is a silent no-op. Errors only arise on the construction side, when
//! loading options or surface fixtures from files.

use thiserror::Error;

/// The main error type for lanesift operations.
///
/// Consolidates the error conditions that can occur while building an engine:
/// reading option or fixture files and decoding their contents. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic
/// conversion.
#[derive(Debug, Error)]
pub enum LanesiftError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An options or fixture document could not be decoded.
    ///
    /// Occurs when a TOML options file or JSON surface fixture fails to
    /// parse. The string contains the decoder's diagnostic.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration values are invalid.
    ///
    /// Occurs when option values are present but unusable, such as an empty
    /// class prefix. The string describes the specific problem.
    #[error("Options error: {0}")]
    Options(String),
}

/// A specialized `Result` type for lanesift operations.
///
/// This is a type alias for `std::result::Result<T, LanesiftError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LanesiftError>;
