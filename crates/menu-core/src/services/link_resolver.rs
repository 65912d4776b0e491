//! Resolution of a menu link to the URL it should render with.

use serde_json::Value;
use tracing::warn;

use crate::domain::{MenuLink, RouteKwargs, RouteMatch};
use crate::error::RouteError;

/// Named-route table of the hosting application.
pub trait UrlResolver: Send + Sync {
    /// Builds the percent-encoded path for `route_name` from positional or
    /// keyword arguments.
    fn reverse(&self, route_name: &str, args: &[Value], kwargs: &RouteKwargs) -> Result<String, RouteError>;

    /// Finds the named route serving `path`, if any. `path` is already
    /// percent-decoded and carries no query string.
    fn resolve(&self, path: &str) -> Option<RouteMatch>;
}

/// Resolved URL of a link, or `None` when there is nothing to link to.
/// Reverse failures are logged and swallowed so one stale entry never
/// breaks the whole menu.
pub fn resolve_link(link: &MenuLink, resolver: &dyn UrlResolver) -> Option<String> {
    match link {
        MenuLink::Direct { url } if url.is_empty() => None,
        MenuLink::Direct { url } => Some(url.clone()),
        MenuLink::Named { route, args, kwargs } => match resolver.reverse(route, args, kwargs) {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(route = %route, error = %e, "Menu link could not be resolved");
                None
            }
        },
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Knows `home` (`/`), `about` (`/about/`) and `team` (`/about/{slug}/`).
    pub(crate) struct StubResolver;

    impl UrlResolver for StubResolver {
        fn reverse(&self, route_name: &str, args: &[Value], kwargs: &RouteKwargs) -> Result<String, RouteError> {
            match (route_name, args, kwargs.get("slug")) {
                ("home", [], None) => Ok("/".to_string()),
                ("about", [], None) => Ok("/about/".to_string()),
                ("team", [Value::String(slug)], None) | ("team", [], Some(Value::String(slug))) => {
                    Ok(format!("/about/{}/", slug))
                }
                ("home" | "about" | "team", _, _) => Err(RouteError::NoReverseMatch {
                    name: route_name.to_string(),
                    arguments: format!("{:?} {:?}", args, kwargs),
                }),
                _ => Err(RouteError::UnknownRoute(route_name.to_string())),
            }
        }

        fn resolve(&self, _path: &str) -> Option<RouteMatch> {
            None
        }
    }

    #[test]
    fn test_direct_link() {
        assert_eq!(resolve_link(&MenuLink::direct("/about/"), &StubResolver), Some("/about/".to_string()));
        assert_eq!(
            resolve_link(&MenuLink::direct("https://example.com"), &StubResolver),
            Some("https://example.com".to_string())
        );
        assert_eq!(resolve_link(&MenuLink::direct(""), &StubResolver), None);
    }

    #[test]
    fn test_named_link() {
        let link = MenuLink::named_with("team", vec![json!("dev")], RouteKwargs::new());
        assert_eq!(resolve_link(&link, &StubResolver), Some("/about/dev/".to_string()));

        let mut kwargs = RouteKwargs::new();
        kwargs.insert("slug".into(), json!("ops"));
        let link = MenuLink::named_with("team", vec![], kwargs);
        assert_eq!(resolve_link(&link, &StubResolver), Some("/about/ops/".to_string()));
    }

    #[test]
    fn test_resolution_failures_are_silent() {
        assert_eq!(resolve_link(&MenuLink::named("missing"), &StubResolver), None);
        assert_eq!(resolve_link(&MenuLink::named("team"), &StubResolver), None);
    }
}
