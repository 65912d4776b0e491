//! Active-item matching against the current request.

use std::borrow::Cow;

use crate::domain::{CurrentRequest, MenuLink, RouteArgs, RouteKwargs};

/// Whether a menu item points at the current request.
///
/// A named link matches first by route: same route name, and the item's
/// args/kwargs (when it has any) agree with the request's. Otherwise the
/// resolved URL is compared with the request path, ignoring trailing `/`.
pub fn is_active(link: &MenuLink, resolved_url: Option<&str>, request: &CurrentRequest) -> bool {
    if let MenuLink::Named { route, args, kwargs } = link {
        if named_route_matches(route, args, kwargs, request) {
            return true;
        }
    }

    resolved_url.is_some_and(|url| paths_match(url, &request.path))
}

fn named_route_matches(route: &str, args: &RouteArgs, kwargs: &RouteKwargs, request: &CurrentRequest) -> bool {
    let Some(current) = request.route.as_ref() else {
        return false;
    };
    if current.route_name != route {
        return false;
    }

    let args_match = args.is_empty() || *args == current.args;
    let kwargs_match = kwargs
        .iter()
        .all(|(key, value)| current.kwargs.get(key) == Some(value));

    args_match && kwargs_match
}

/// Compares a link URL, possibly percent-encoded, with the decoded request
/// path. A trailing `/` is insignificant.
pub fn paths_match(url: &str, request_path: &str) -> bool {
    let url = urlencoding::decode(url).unwrap_or(Cow::Borrowed(url));
    url.trim_end_matches('/') == request_path.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteMatch;
    use serde_json::json;

    fn kwargs(pairs: &[(&str, serde_json::Value)]) -> RouteKwargs {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_paths_match_ignores_trailing_slash() {
        assert!(paths_match("/about/", "/about"));
        assert!(paths_match("/about", "/about/"));
        assert!(paths_match("/", ""));
        assert!(!paths_match("/about/", "/about/team/"));
        assert!(!paths_match("/About/", "/about/"));
    }

    #[test]
    fn test_paths_match_decodes_link_url() {
        assert!(paths_match("/caf%C3%A9/", "/café"));
        assert!(paths_match("/café/", "/café/"));
        assert!(paths_match("/tags/foo%20bar/", "/tags/foo bar/"));
        assert!(!paths_match("/tags/foo%20bar/", "/tags/foo%20bar/x"));
        // invalid UTF-8 escapes are compared verbatim
        assert!(paths_match("/bad%FF/", "/bad%FF"));
    }

    #[test]
    fn test_direct_link_matches_by_path() {
        let request = CurrentRequest::new("/about");
        assert!(is_active(&MenuLink::direct("/about/"), Some("/about/"), &request));
        assert!(!is_active(&MenuLink::direct("/"), Some("/"), &request));
        assert!(!is_active(&MenuLink::direct(""), None, &request));
    }

    #[test]
    fn test_named_link_without_args_matches_any_route_args() {
        let request = CurrentRequest::new("/articles/7/").with_route(Some(
            RouteMatch::new("article")
                .with_args(vec![json!(7)])
                .with_kwargs(kwargs(&[("id", json!(7))])),
        ));

        // unresolvable, so only the route check can activate it
        assert!(is_active(&MenuLink::named("article"), None, &request));
        assert!(!is_active(&MenuLink::named("articles"), None, &request));
    }

    #[test]
    fn test_named_link_args_must_equal_route_args() {
        let request = CurrentRequest::new("/x/")
            .with_route(Some(RouteMatch::new("article").with_args(vec![json!(7)])));

        let same = MenuLink::named_with("article", vec![json!(7)], RouteKwargs::new());
        let other = MenuLink::named_with("article", vec![json!(8)], RouteKwargs::new());
        assert!(is_active(&same, None, &request));
        assert!(!is_active(&other, None, &request));
    }

    #[test]
    fn test_named_link_kwargs_are_a_subset_check() {
        let request = CurrentRequest::new("/blog/2024/rust/").with_route(Some(
            RouteMatch::new("post").with_kwargs(kwargs(&[("year", json!(2024)), ("slug", json!("rust"))])),
        ));

        let subset = MenuLink::named_with("post", vec![], kwargs(&[("year", json!(2024))]));
        let wrong_value = MenuLink::named_with("post", vec![], kwargs(&[("year", json!(2023))]));
        let wrong_type = MenuLink::named_with("post", vec![], kwargs(&[("year", json!("2024"))]));
        let extra_key = MenuLink::named_with("post", vec![], kwargs(&[("page", json!(1))]));

        assert!(is_active(&subset, None, &request));
        assert!(!is_active(&wrong_value, None, &request));
        assert!(!is_active(&wrong_type, None, &request));
        assert!(!is_active(&extra_key, None, &request));
    }

    #[test]
    fn test_named_link_falls_back_to_path() {
        // request did not resolve to a route, but the reversed URL matches
        let request = CurrentRequest::new("/about/team");
        let link = MenuLink::named("team");
        assert!(is_active(&link, Some("/about/team/"), &request));
    }
}
