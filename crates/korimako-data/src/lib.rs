//! Dataset loading and configuration for korimako.
//!
//! The bird dataset is a single static JSON document. This crate reads and
//! parses it (tolerating missing optional fields) and provides the layered
//! configuration shared by the CLI.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod source;

pub use config::Config;
pub use error::DataError;
pub use source::{load_dataset, DEFAULT_DATASET};
