//! Domain layer for the lanesift engine.
//!
//! This module contains the core vocabulary types shared by every other layer:
//! the two filter lanes, typed filter tags, resolved class names, and the
//! central error type. It has no dependency on the surface or rendering
//! layers, keeping the filter rules isolated from how elements are stored
//! or displayed.
//!
//! # Organization
//!
//! - [`classes`]: Class names resolved from options and group name
//! - [`error`]: Error types and result aliases
//! - [`lane`]: The two filter dimensions
//! - [`tag`]: Typed filter tags parsed from class lists

pub mod classes;
pub mod error;
pub mod lane;
pub mod tag;

pub use classes::ClassNames;
pub use error::{LanesiftError, Result};
pub use lane::Lane;
pub use tag::FilterTag;
