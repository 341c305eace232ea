use serde_json::Value;

use crate::server::error::{internal::InternalError, AppError};

/// Parses an i32 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `i32`
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed String to `i32`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as an i32
pub fn parse_i32_from_string(value: String) -> Result<i32, AppError> {
    let result = value
        .parse::<i32>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Reads a JSON array column holding integer ids.
///
/// # Returns
/// - `Ok(Vec<i32>)` - The ids in stored order
/// - `Err(AppError::InternalErr(MalformedJson))` - Value is not an array of integers
pub fn parse_id_array(column: &'static str, value: &Value) -> Result<Vec<i32>, AppError> {
    let Some(items) = value.as_array() else {
        return Err(InternalError::MalformedJson {
            column,
            reason: format!("expected array, found {}", value),
        }
        .into());
    };

    items
        .iter()
        .map(|item| {
            item.as_i64()
                .and_then(|id| i32::try_from(id).ok())
                .ok_or_else(|| {
                    InternalError::MalformedJson {
                        column,
                        reason: format!("expected integer id, found {}", item),
                    }
                    .into()
                })
        })
        .collect()
}

/// Trims a free-text search term, returning `None` for blank input so the
/// filter can be skipped.
pub fn search_term(term: Option<&str>) -> Option<&str> {
    term.map(str::trim).filter(|t| !t.is_empty())
}
