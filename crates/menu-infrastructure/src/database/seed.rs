//! Demo menu seeding for local runs

use tracing::info;

use menu_core::domain::{Menu, MenuItem, MenuLink};
use menu_core::error::DomainError;

use super::postgres::PgMenuRepository;

/// Inserts Home / About / Team and an external link under `menu_name` unless the menu exists.
/// Returns whether anything was inserted.
pub async fn seed_demo_menu(repo: &PgMenuRepository, menu_name: &str) -> Result<bool, DomainError> {
    if repo.find_menu(menu_name).await?.is_some() {
        return Ok(false);
    }

    let menu = Menu::new(menu_name.to_string(), "Main menu".to_string())
        .map_err(|e| DomainError::ValidationError(e.to_string()))?;
    let menu = repo.create_menu(&menu).await?;

    let home = demo_item(None, "Home", MenuLink::named("home"), 0)?;
    repo.create_item(menu.id, &home).await?;

    let about = demo_item(None, "About", MenuLink::direct("/about/"), 1)?;
    let about = repo.create_item(menu.id, &about).await?;

    let team = demo_item(Some(about.id), "Team", MenuLink::direct("/about/team/"), 0)?;
    repo.create_item(menu.id, &team).await?;

    let source = demo_item(None, "Source", MenuLink::direct("https://github.com/"), 2)?.with_new_tab(true);
    repo.create_item(menu.id, &source).await?;

    info!("Seeded demo menu: {}", menu_name);
    Ok(true)
}

fn demo_item(parent_id: Option<i64>, title: &str, link: MenuLink, order: i32) -> Result<MenuItem, DomainError> {
    MenuItem::new(0, parent_id, title.to_string(), link, order)
        .map_err(|e| DomainError::ValidationError(e.to_string()))
}
