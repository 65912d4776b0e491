//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu not found: {0}")]
    MenuNotFound(String),

    #[error("Menu name already exists: {0}")]
    MenuNameAlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Failures of the named-route table. Menu drawing never surfaces these;
/// an item whose route cannot be reversed simply has no URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Reverse for '{0}' not found: no route with that name")]
    UnknownRoute(String),

    #[error("Reverse for '{name}' with arguments {arguments} not found")]
    NoReverseMatch { name: String, arguments: String },

    #[error("Cannot mix positional and keyword arguments when reversing '{0}'")]
    MixedArguments(String),

    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
