//! Short code generation.
//!
//! Codes are drawn from the operating system RNG and encoded as URL-safe
//! base64 without padding, so they can be embedded in a path segment as-is.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of an encoded code (`CODE_LENGTH_BYTES * 4 / 3`).
pub const CODE_LENGTH: usize = 8;

/// Generates a random short code.
///
/// Produces an 8-character code over `[A-Za-z0-9_-]`, 48 bits of entropy.
/// Uniqueness is not guaranteed here; the store rejects collisions and the
/// caller retries.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
