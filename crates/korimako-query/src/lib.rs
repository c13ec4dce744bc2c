//! Query evaluation and result ordering for korimako.
//!
//! A search is a pure predicate over bird records (name substring plus
//! conservation-status equality) followed by an ordering policy. Nothing in
//! this crate touches a rendering surface or the favourites store, so the
//! whole of it is testable without a terminal.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod filter;
pub mod order;

pub use filter::{matches, normalize, SearchQuery, StatusFilter};
pub use order::{arrange, arrange_favourites, SortOrder};
