//! Application-wide constants

pub const DEFAULT_MENU_NAME: &str = "main_menu";
pub const DEFAULT_TEMPLATE_NAME: &str = "menu";
pub const PAGE_TEMPLATE_NAME: &str = "page";
pub const LOG_FILE_PREFIX: &str = "menu-server";
