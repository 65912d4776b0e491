// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Flat menu item row and its link target
// ============================================================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use validator::{Validate, ValidationError};

/// Positional route arguments.
pub type RouteArgs = Vec<Value>;

/// Keyword route arguments.
pub type RouteKwargs = BTreeMap<String, Value>;

const MAX_EXTERNAL_URL_LEN: usize = 1024;
const MAX_ROUTE_NAME_LEN: usize = 255;

/// Where a menu item points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuLink {
    /// Literal path or absolute URL. Empty means "no link".
    Direct { url: String },
    /// Named route, reversed through the route table at render time.
    Named {
        route: String,
        #[serde(default)]
        args: RouteArgs,
        #[serde(default)]
        kwargs: RouteKwargs,
    },
}

impl MenuLink {
    pub fn direct(url: impl Into<String>) -> Self {
        MenuLink::Direct { url: url.into() }
    }

    pub fn named(route: impl Into<String>) -> Self {
        MenuLink::Named {
            route: route.into(),
            args: RouteArgs::new(),
            kwargs: RouteKwargs::new(),
        }
    }

    pub fn named_with(route: impl Into<String>, args: RouteArgs, kwargs: RouteKwargs) -> Self {
        MenuLink::Named {
            route: route.into(),
            args,
            kwargs,
        }
    }

    /// Normalizes the stored columns into a link. A non-empty route name
    /// wins over the external URL; stored arguments are decoded once here.
    pub fn from_columns(
        external_url: &str,
        named_url: &str,
        named_args: Option<Value>,
        named_kwargs: Option<Value>,
    ) -> Self {
        let route = named_url.trim();
        if route.is_empty() {
            return MenuLink::direct(external_url.trim());
        }

        MenuLink::Named {
            route: route.to_string(),
            args: decode_args(named_args),
            kwargs: decode_kwargs(named_kwargs),
        }
    }

    pub fn route_name(&self) -> Option<&str> {
        match self {
            MenuLink::Named { route, .. } => Some(route),
            MenuLink::Direct { .. } => None,
        }
    }
}

/// Decodes stored positional arguments. Accepts a JSON array or the legacy
/// text encoding of one; anything else becomes empty.
pub fn decode_args(raw: Option<Value>) -> RouteArgs {
    match decode_legacy_text(raw, "named_args") {
        Some(Value::Array(args)) => args,
        Some(Value::Null) | None => RouteArgs::new(),
        Some(other) => {
            warn!(value = %other, "named_args is not an array, treating as empty");
            RouteArgs::new()
        }
    }
}

/// Decodes stored keyword arguments. Accepts a JSON object or the legacy
/// text encoding of one; anything else becomes empty.
pub fn decode_kwargs(raw: Option<Value>) -> RouteKwargs {
    match decode_legacy_text(raw, "named_kwargs") {
        Some(Value::Object(map)) => map.into_iter().collect(),
        Some(Value::Null) | None => RouteKwargs::new(),
        Some(other) => {
            warn!(value = %other, "named_kwargs is not an object, treating as empty");
            RouteKwargs::new()
        }
    }
}

fn decode_legacy_text(raw: Option<Value>, column: &str) -> Option<Value> {
    match raw {
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            match serde_json::from_str(text) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(column, error = %e, "Undecodable stored route arguments, treating as empty");
                    None
                }
            }
        }
        other => other,
    }
}

/// Menu item as loaded from storage. Immutable for the duration of a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MenuItem {
    /// Storage id, ignored on insert.
    pub id: i64,
    pub parent_id: Option<i64>,

    #[validate(length(min = 1, max = 200, message = "Menu item title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(custom(function = "validate_link"))]
    pub link: MenuLink,

    /// Sibling order, ties broken by `id`.
    pub order: i32,
    pub open_in_new_tab: bool,
}

impl MenuItem {
    pub fn new(
        id: i64,
        parent_id: Option<i64>,
        title: String,
        link: MenuLink,
        order: i32,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            id,
            parent_id,
            title: title.trim().to_string(),
            link,
            order,
            open_in_new_tab: false,
        };

        item.validate()?;
        Ok(item)
    }

    pub fn with_new_tab(mut self, open: bool) -> Self {
        self.open_in_new_tab = open;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn sort_key(&self) -> (i32, i64) {
        (self.order, self.id)
    }
}

fn validate_link(link: &MenuLink) -> Result<(), ValidationError> {
    match link {
        MenuLink::Direct { url } if url.len() > MAX_EXTERNAL_URL_LEN => {
            Err(ValidationError::new("external_url_length").with_message("External URL too long".into()))
        }
        MenuLink::Named { route, .. } if route.len() > MAX_ROUTE_NAME_LEN => {
            Err(ValidationError::new("named_url_length").with_message("Route name too long".into()))
        }
        _ => Ok(()),
    }
}
