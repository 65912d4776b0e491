use std::borrow::Cow;
use std::sync::Arc;

use axum::http::Uri;
use tracing::warn;

use menu_core::domain::CurrentRequest;
use menu_core::repositories::MenuRepository;
use menu_core::services::MenuService;
use menu_infrastructure::HandlebarsMenuRenderer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService<dyn MenuRepository>>,
    pub templates: Arc<HandlebarsMenuRenderer>,
    /// Menu drawn around every page.
    pub default_menu: String,
}

impl AppState {
    /// Request context for an already decoded `path`, e.g. a `?path=` query
    /// parameter. Anything after `?` is dropped.
    pub fn current_request(&self, path: &str) -> CurrentRequest {
        let path = path.split_once('?').map_or(path, |(path, _)| path);
        self.request_for_path(path)
    }

    /// Request context for the path of an incoming request URI, which is
    /// still percent-encoded.
    pub fn request_for_uri(&self, uri: &Uri) -> CurrentRequest {
        let raw = uri.path();
        let path = match urlencoding::decode(raw) {
            Ok(path) => path,
            Err(e) => {
                warn!(path = raw, error = %e, "Request path is not valid UTF-8 once decoded, matching it verbatim");
                Cow::Borrowed(raw)
            }
        };
        self.request_for_path(&path)
    }

    fn request_for_path(&self, path: &str) -> CurrentRequest {
        let route = self.menu_service.resolver().resolve(path);
        CurrentRequest::new(path).with_route(route)
    }
}
