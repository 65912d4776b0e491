//! # Menu Core
//! 
//! Domain entities, the tree builder and activation rules, and the
//! repository/resolver/renderer ports used to draw navigation menus.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, RouteError};
