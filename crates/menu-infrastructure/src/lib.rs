//! # Menu Infrastructure
//! 
//! Storage, route table and template adapters for the menu core ports.

pub mod database;
pub mod routing;
pub mod render;

pub use database::{create_pool, run_migrations, seed_demo_menu, PgMenuRepository};
pub use routing::RouteTable;
pub use render::HandlebarsMenuRenderer;
