//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to its target URL, with click count
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
