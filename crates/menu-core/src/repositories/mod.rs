//! Repository traits (ports)

pub mod menu_repository;
pub mod in_memory;

pub use menu_repository::MenuRepository;
pub use in_memory::InMemoryMenuRepository;

#[cfg(test)]
pub use menu_repository::MockMenuRepository;
