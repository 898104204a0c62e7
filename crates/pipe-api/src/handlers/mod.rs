//! HTTP request handlers

pub mod health;
pub mod initialize;
pub mod livecomments;
pub mod livestreams;
pub mod reactions;
pub mod statistics;
pub mod themes;
pub mod tips;

/// Parse a path segment as an i64 identifier
pub(crate) fn parse_id(raw: &str, name: &str) -> Result<i64, crate::response::ApiError> {
    raw.parse()
        .map_err(|_| crate::response::ApiError::invalid_path(format!("Invalid {name} format")))
}
