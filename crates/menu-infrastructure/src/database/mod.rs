//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;
pub mod seed;

pub use connection::{create_pool, run_migrations};
pub use postgres::PgMenuRepository;
pub use seed::seed_demo_menu;
