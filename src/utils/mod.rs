//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Target URL validation
//! - [`base_url`] - Public base URL resolution for `short_url`

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
