use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored user role is not one of the known role names.
    #[error("User {user_id} has unknown role '{role}'")]
    UnknownRole { user_id: i32, role: String },

    /// A JSON column holds a value of the wrong shape.
    #[error("Malformed JSON in column '{column}': {reason}")]
    MalformedJson {
        /// Column name
        column: &'static str,
        /// What was wrong with the stored value
        reason: String,
    },
}
