//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
    pub menu: MenuSettings,
    #[serde(default)]
    pub routes: Vec<RouteSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `json` or `pretty`
    pub format: String,
    /// Directory for the daily rolling log file. Stdout only when unset.
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuSettings {
    /// Menu drawn by the page handler.
    pub default_menu: String,
    /// Template used when a caller does not name one.
    pub default_template: String,
    /// Extra `*.hbs` templates registered by file stem.
    pub templates_dir: Option<String>,
    pub seed_demo: bool,
}

/// A named route, e.g. `{ name = "article", pattern = "/articles/{id:int}/" }`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    pub name: String,
    pub pattern: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder_with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "menu-server")?
            .set_default("database.url", "postgres://localhost/menus")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("log.format", "json")?
            .set_default("menu.default_menu", crate::constants::DEFAULT_MENU_NAME)?
            .set_default("menu.default_template", crate::constants::DEFAULT_TEMPLATE_NAME)?
            .set_default("menu.seed_demo", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_deserialize() {
        let config: AppConfig = AppConfig::builder_with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.menu.default_menu, "main_menu");
        assert_eq!(config.menu.default_template, "menu");
        assert!(config.log.dir.is_none());
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_routes_from_toml() {
        let toml = r#"
            [[routes]]
            name = "home"
            pattern = "/"

            [[routes]]
            name = "article"
            pattern = "/articles/{id:int}/"
        "#;
        let config: AppConfig = AppConfig::builder_with_defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(
            config.routes[1],
            RouteSettings { name: "article".into(), pattern: "/articles/{id:int}/".into() }
        );
    }
}
