use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// Snowflakes are stored as strings; this converts them back at the repository
/// boundary.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored snowflake.
///
/// # Returns
/// - `Ok(None)` - No value stored
/// - `Ok(Some(u64))` - Parsed identifier
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored value is not a number
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}
