// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};

use menu_core::domain::{Menu, MenuItem, MenuLink};
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_menu(&self, name: &str) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, name, title
            FROM menus
            WHERE name = $1
            "#
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by name: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    pub async fn create_menu(&self, menu: &Menu) -> Result<Menu, DomainError> {
        info!("Creating menu: {}", menu.name);

        let row: MenuRow = sqlx::query_as(
            r#"
            INSERT INTO menus (name, title)
            VALUES ($1, $2)
            RETURNING id, name, title
            "#
        )
        .bind(&menu.name)
        .bind(&menu.title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::MenuNameAlreadyExists(menu.name.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        Ok(row.into())
    }

    /// Inserts `item` into the menu; `item.id` is ignored and the stored
    /// row is returned.
    pub async fn create_item(&self, menu_id: i64, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let columns = LinkColumns::from(&item.link);

        let row: MenuItemRow = sqlx::query_as(
            r#"
            INSERT INTO menu_items (
                menu_id, parent_id, title, external_url, named_url,
                named_args, named_kwargs, sort_order, open_in_new_tab
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, parent_id, title, external_url, named_url,
                named_args, named_kwargs, sort_order, open_in_new_tab
            "#
        )
        .bind(menu_id)
        .bind(item.parent_id)
        .bind(&item.title)
        .bind(&columns.external_url)
        .bind(&columns.named_url)
        .bind(&columns.named_args)
        .bind(&columns.named_kwargs)
        .bind(item.order)
        .bind(item.open_in_new_tab)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating menu item: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT
                mi.id, mi.parent_id, mi.title, mi.external_url, mi.named_url,
                mi.named_args, mi.named_kwargs, mi.sort_order, mi.open_in_new_tab
            FROM menu_items mi
            JOIN menus m ON m.id = mi.menu_id
            WHERE m.name = $1
            ORDER BY mi.sort_order, mi.id
            "#
        )
        .bind(menu_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching menu items for {}: {}", menu_name, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Fetched {} menu items for {}", rows.len(), menu_name);
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: i64,
    pub name: String,
    pub title: String,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            name: row.name,
            title: row.title,
        }
    }
}

#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub title: String,
    pub external_url: String,
    pub named_url: String,
    pub named_args: Option<Value>,
    pub named_kwargs: Option<Value>,
    pub sort_order: i32,
    pub open_in_new_tab: bool,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            parent_id: row.parent_id,
            title: row.title,
            link: MenuLink::from_columns(&row.external_url, &row.named_url, row.named_args, row.named_kwargs),
            order: row.sort_order,
            open_in_new_tab: row.open_in_new_tab,
        }
    }
}

/// Storage columns of a link.
#[derive(Debug, PartialEq)]
struct LinkColumns {
    external_url: String,
    named_url: String,
    named_args: Option<Value>,
    named_kwargs: Option<Value>,
}

impl From<&MenuLink> for LinkColumns {
    fn from(link: &MenuLink) -> Self {
        match link {
            MenuLink::Direct { url } => LinkColumns {
                external_url: url.clone(),
                named_url: String::new(),
                named_args: None,
                named_kwargs: None,
            },
            MenuLink::Named { route, args, kwargs } => LinkColumns {
                external_url: String::new(),
                named_url: route.clone(),
                named_args: (!args.is_empty()).then(|| Value::Array(args.clone())),
                named_kwargs: (!kwargs.is_empty())
                    .then(|| Value::Object(kwargs.clone().into_iter().collect())),
            },
        }
    }
}
