// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! Menu drawing: one repository fetch, in-memory tree build, template render

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use menu_shared::constants::DEFAULT_TEMPLATE_NAME;

use crate::domain::{CurrentRequest, MenuItem, MenuNode, MenuTree};
use crate::error::DomainError;
use crate::repositories::MenuRepository;
use super::link_resolver::UrlResolver;
use super::tree_builder::build_menu_tree;

/// Data handed to a menu template.
#[derive(Debug, Serialize)]
pub struct MenuRenderContext<'a> {
    pub menu_name: &'a str,
    pub tree: &'a [MenuNode],
    pub request: Option<&'a CurrentRequest>,
}

/// Template engine port. Implementations must escape interpolated values.
pub trait MenuRenderer: Send + Sync {
    fn render(&self, template_name: &str, context: &MenuRenderContext<'_>) -> Result<String, DomainError>;
}

/// Menu drawing service
pub struct MenuService<R: MenuRepository + ?Sized> {
    menu_repo: Arc<R>,
    resolver: Arc<dyn UrlResolver>,
    renderer: Arc<dyn MenuRenderer>,
    default_template: String,
}

impl<R: MenuRepository + ?Sized> MenuService<R> {
    pub fn new(menu_repo: Arc<R>, resolver: Arc<dyn UrlResolver>, renderer: Arc<dyn MenuRenderer>) -> Self {
        Self {
            menu_repo,
            resolver,
            renderer,
            default_template: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }

    pub fn with_default_template(mut self, template_name: impl Into<String>) -> Self {
        self.default_template = template_name.into();
        self
    }

    pub fn resolver(&self) -> &dyn UrlResolver {
        self.resolver.as_ref()
    }

    /// Fetches the menu once and builds the annotated tree.
    pub async fn load_tree(
        &self,
        menu_name: &str,
        request: Option<&CurrentRequest>,
    ) -> Result<MenuTree, DomainError> {
        let items = self.fetch_items(menu_name).await?;
        Ok(build_menu_tree(items, self.resolver.as_ref(), request))
    }

    /// Renders the menu as an HTML fragment. A menu without items renders
    /// as an empty string; a menu whose items are all unreachable still
    /// renders its template with an empty tree.
    pub async fn draw_menu(
        &self,
        menu_name: &str,
        template_name: Option<&str>,
        request: Option<&CurrentRequest>,
    ) -> Result<String, DomainError> {
        let items = self.fetch_items(menu_name).await?;
        if items.is_empty() {
            debug!(menu = menu_name, "Menu has no items, rendering nothing");
            return Ok(String::new());
        }
        let tree = build_menu_tree(items, self.resolver.as_ref(), request);

        let template_name = template_name.unwrap_or(&self.default_template);
        let context = MenuRenderContext {
            menu_name,
            tree: &tree.roots,
            request,
        };
        let html = self.renderer.render(template_name, &context)?;

        info!(
            menu = menu_name,
            template = template_name,
            nodes = tree.len(),
            active = tree.active_ids().len(),
            "Menu drawn"
        );
        Ok(html)
    }

    async fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError> {
        let items = self.menu_repo.fetch_items(menu_name).await?;
        debug!(menu = menu_name, items = items.len(), "Menu items fetched");
        Ok(items)
    }
}
