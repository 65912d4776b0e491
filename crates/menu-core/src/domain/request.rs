//! Current request context used to decide which menu items are active.

use serde::Serialize;

use super::menu_item::{RouteArgs, RouteKwargs};

/// Route the current request was dispatched to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMatch {
    pub route_name: String,
    pub args: RouteArgs,
    pub kwargs: RouteKwargs,
}

impl RouteMatch {
    pub fn new(route_name: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            args: RouteArgs::new(),
            kwargs: RouteKwargs::new(),
        }
    }

    pub fn with_args(mut self, args: RouteArgs) -> Self {
        self.args = args;
        self
    }

    pub fn with_kwargs(mut self, kwargs: RouteKwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentRequest {
    /// Percent-decoded request path without query string.
    pub path: String,
    /// `None` when the path did not resolve to a named route.
    pub route: Option<RouteMatch>,
}

impl CurrentRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            route: None,
        }
    }

    pub fn with_route(mut self, route: Option<RouteMatch>) -> Self {
        self.route = route;
        self
    }

    pub fn route_name(&self) -> Option<&str> {
        self.route.as_ref().map(|r| r.route_name.as_str())
    }
}
