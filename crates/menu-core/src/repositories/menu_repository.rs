//! Menu repository trait (port)

use async_trait::async_trait;
use crate::domain::MenuItem;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All items of the named menu in one round trip, ordered by
    /// `(order, id)`. Unknown menus yield an empty list.
    async fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>, DomainError>;
}
