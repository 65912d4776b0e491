//! Domain services (business logic)

pub mod link_resolver;
pub mod activation;
pub mod tree_builder;
pub mod menu_service;

pub use link_resolver::{resolve_link, UrlResolver};
pub use activation::{is_active, paths_match};
pub use tree_builder::build_menu_tree;
pub use menu_service::{MenuRenderContext, MenuRenderer, MenuService};
