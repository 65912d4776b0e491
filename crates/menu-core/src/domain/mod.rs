//! # Menu Core - Domain Module
//! 
//! Domain entities for menu rendering.

pub mod menu;
pub mod menu_item;
pub mod node;
pub mod request;

// Re-export all entities
pub use menu::Menu;
pub use menu_item::{MenuItem, MenuLink, RouteArgs, RouteKwargs};
pub use node::{MenuNode, MenuTree};
pub use request::{CurrentRequest, RouteMatch};
