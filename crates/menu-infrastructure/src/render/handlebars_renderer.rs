// ============================================================================
// Menu Infrastructure - Handlebars Menu Renderer
// File: crates/menu-infrastructure/src/render/handlebars_renderer.rs
// ============================================================================
//! Renders menu trees and the page shell with Handlebars. `{{...}}`
//! interpolations are HTML-escaped by the registry.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{error, info};

use menu_core::error::DomainError;
use menu_core::services::{MenuRenderContext, MenuRenderer};
use menu_shared::constants::{DEFAULT_TEMPLATE_NAME, PAGE_TEMPLATE_NAME};

const MENU_TEMPLATE: &str = include_str!("../../templates/menu.hbs");
const MENU_NODE_PARTIAL: &str = include_str!("../../templates/menu_node.hbs");
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.hbs");

pub struct HandlebarsMenuRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsMenuRenderer {
    /// Registry with the built-in `menu` and `page` templates and the
    /// recursive `menu_node` partial.
    pub fn new() -> Result<Self, DomainError> {
        let mut renderer = Self {
            registry: Handlebars::new(),
        };
        renderer
            .registry
            .register_partial("menu_node", MENU_NODE_PARTIAL)
            .map_err(template_error)?;
        renderer.register_template(DEFAULT_TEMPLATE_NAME, MENU_TEMPLATE)?;
        renderer.register_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(renderer)
    }

    /// Registers every `*.hbs` file in `dir` under its file stem, replacing
    /// built-ins of the same name.
    pub fn with_templates_dir(mut self, dir: &Path) -> Result<Self, DomainError> {
        let entries = fs::read_dir(dir).map_err(|e| {
            error!("Cannot read templates dir {}: {}", dir.display(), e);
            DomainError::RenderError(e.to_string())
        })?;

        for entry in entries {
            let path = entry.map_err(|e| DomainError::RenderError(e.to_string()))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("hbs") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            self.registry
                .register_template_file(name, &path)
                .map_err(template_error)?;
            info!("Registered menu template {} from {}", name, path.display());
        }
        Ok(self)
    }

    pub fn register_template(&mut self, name: &str, source: &str) -> Result<(), DomainError> {
        self.registry
            .register_template_string(name, source)
            .map_err(template_error)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }

    /// Renders any registered template with arbitrary data.
    pub fn render_template<T: Serialize>(&self, name: &str, data: &T) -> Result<String, DomainError> {
        if !self.has_template(name) {
            return Err(DomainError::RenderError(format!("Template not found: {}", name)));
        }
        self.registry.render(name, data).map_err(|e| {
            error!("Failed to render template {}: {}", name, e);
            DomainError::RenderError(e.to_string())
        })
    }
}

impl MenuRenderer for HandlebarsMenuRenderer {
    fn render(&self, template_name: &str, context: &MenuRenderContext<'_>) -> Result<String, DomainError> {
        self.render_template(template_name, context)
    }
}

fn template_error(e: handlebars::TemplateError) -> DomainError {
    error!("Invalid menu template: {}", e);
    DomainError::RenderError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::domain::{CurrentRequest, MenuItem, MenuLink, MenuNode};
    use serde_json::json;

    fn node(id: i64, title: &str, url: Option<&str>, active: bool, expanded: bool, children: Vec<MenuNode>) -> MenuNode {
        MenuNode {
            item: MenuItem::new(id, None, title.to_string(), MenuLink::direct(url.unwrap_or("")), 0).unwrap(),
            url: url.map(str::to_string),
            active,
            expanded,
            children,
        }
    }

    fn render(tree: &[MenuNode]) -> String {
        let renderer = HandlebarsMenuRenderer::new().unwrap();
        let request = CurrentRequest::new("/about/team/");
        let context = MenuRenderContext {
            menu_name: "main_menu",
            tree,
            request: Some(&request),
        };
        renderer.render("menu", &context).unwrap()
    }

    #[test]
    fn test_renders_nested_active_path() {
        let tree = vec![
            node(1, "Home", Some("/"), false, false, vec![]),
            node(
                2,
                "About",
                Some("/about/"),
                false,
                true,
                vec![node(3, "Team", Some("/about/team/"), true, true, vec![])],
            ),
        ];
        let html = render(&tree);

        assert!(html.contains(r#"<ul class="menu" data-menu="main_menu">"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<li class="menu-item expanded">"#));
        assert!(html.contains(r#"<li class="menu-item active expanded">"#));
        assert!(html.contains(r#"<a href="/about/team/" aria-current="page">Team</a>"#));
        assert!(html.contains(r#"<ul class="submenu">"#));
    }

    #[test]
    fn test_collapsed_children_are_not_rendered() {
        let tree = vec![node(
            2,
            "About",
            Some("/about/"),
            false,
            false,
            vec![node(3, "Team", Some("/about/team/"), false, false, vec![])],
        )];
        let html = render(&tree);

        assert!(html.contains("About"));
        assert!(!html.contains("Team"));
    }

    #[test]
    fn test_missing_url_and_new_tab() {
        let mut external = node(5, "Docs", Some("https://example.com/?a=1&b=2"), false, false, vec![]);
        external.item.open_in_new_tab = true;
        let tree = vec![node(4, "Broken", None, false, false, vec![]), external];
        let html = render(&tree);

        assert!(html.contains("<span>Broken</span>"));
        assert!(html.contains(r#"target="_blank" rel="noopener""#));
        assert!(html.contains("&amp;b"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let tree = vec![node(1, "<script>alert(1)</script>", Some("/"), false, false, vec![])];
        let html = render(&tree);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let renderer = HandlebarsMenuRenderer::new().unwrap();
        let context = MenuRenderContext {
            menu_name: "main_menu",
            tree: &[],
            request: None,
        };
        assert!(matches!(
            renderer.render("sidebar", &context),
            Err(DomainError::RenderError(_))
        ));
    }

    #[test]
    fn test_custom_template_and_page() {
        let mut renderer = HandlebarsMenuRenderer::new().unwrap();
        renderer
            .register_template("flat", "{{#each tree}}[{{item.title}}]{{/each}}")
            .unwrap();
        let tree = vec![node(1, "Home", Some("/"), false, false, vec![])];
        let context = MenuRenderContext {
            menu_name: "main_menu",
            tree: &tree,
            request: None,
        };
        assert_eq!(renderer.render("flat", &context).unwrap(), "[Home]");

        let page = renderer
            .render_template("page", &json!({"title": "About", "path": "/about/", "menu": "<ul></ul>"}))
            .unwrap();
        assert!(page.contains("<nav><ul></ul></nav>"));
        assert!(page.contains("<title>About</title>"));
    }

    #[test]
    fn test_templates_dir_registers_only_hbs_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sidebar.hbs"),
            "<aside>{{#each tree}}{{item.title}};{{/each}}</aside>",
        )
        .unwrap();
        fs::write(dir.path().join("menu.hbs"), "<ol>{{menu_name}}</ol>").unwrap();
        fs::write(dir.path().join("notes.txt"), "{{#if}}").unwrap();

        let renderer = HandlebarsMenuRenderer::new()
            .unwrap()
            .with_templates_dir(dir.path())
            .unwrap();
        assert!(renderer.has_template("sidebar"));
        assert!(!renderer.has_template("notes"));
        assert!(renderer.has_template("page"));

        let tree = vec![node(1, "Home", Some("/"), false, false, vec![])];
        let context = MenuRenderContext {
            menu_name: "main_menu",
            tree: &tree,
            request: None,
        };
        assert_eq!(renderer.render("sidebar", &context).unwrap(), "<aside>Home;</aside>");
        assert_eq!(renderer.render("menu", &context).unwrap(), "<ol>main_menu</ol>");
    }

    #[test]
    fn test_missing_templates_dir_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        assert!(matches!(
            HandlebarsMenuRenderer::new().unwrap().with_templates_dir(&missing),
            Err(DomainError::RenderError(_))
        ));
    }
}
