//! Routing errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A query parameter has a value the view does not understand.
    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: String, value: String },

    /// Percent-encoding did not decode to UTF-8.
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}
