// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Named menu that owns a set of menu items
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Menu entity. `name` is the identifier templates and handlers ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Menu {
    /// Storage id, `0` until inserted.
    pub id: i64,

    #[validate(
        length(min = 1, max = 100, message = "Menu name must be between 1 and 100 characters"),
        custom(function = "validate_slug")
    )]
    pub name: String,

    #[validate(length(max = 200, message = "Menu title too long"))]
    pub title: String,
}

impl Menu {
    pub fn new(name: String, title: String) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            id: 0,
            name: name.trim().to_string(),
            title: title.trim().to_string(),
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Title when one is set, otherwise the internal name.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

fn validate_slug(name: &str) -> Result<(), ValidationError> {
    let is_slug = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if is_slug {
        Ok(())
    } else {
        Err(ValidationError::new("slug")
            .with_message("Menu name may only contain letters, digits, '-' and '_'".into()))
    }
}
