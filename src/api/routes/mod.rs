//! Route handlers, grouped by page.

pub mod league;
pub mod players;
pub mod seasons;

use std::str::FromStr;

use crate::api::ApiError;

/// Parse a path segment, answering 400 when it is not a number.
pub(crate) fn parse_segment<T: FromStr>(raw: &str, what: &str) -> Result<T, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {}: {}", what, raw)))
}
