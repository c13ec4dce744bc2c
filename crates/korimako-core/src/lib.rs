//! Core domain model for korimako.
//!
//! This crate defines the bird record model, the New Zealand
//! conservation-status taxonomy, the theme type shared by every rendering
//! surface, and the SQLite-backed favourites store.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod schema;
pub mod taxonomy;

pub use error::{Error, Result};
