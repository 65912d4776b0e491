use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use menu_api::{build_router, AppState};
use menu_core::repositories::MenuRepository;
use menu_core::services::MenuService;
use menu_infrastructure::{
    create_pool, run_migrations, seed_demo_menu, HandlebarsMenuRenderer, PgMenuRepository, RouteTable,
};
use menu_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    menu_shared::telemetry::init_telemetry(&config.log)?;

    info!("{} starting ({})...", config.app.name, config.app.env);

    // Connect to Database
    info!("Connecting to database...");
    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;
    info!("Database connection established.");

    let repo = Arc::new(PgMenuRepository::new(pool));
    if config.menu.seed_demo {
        if seed_demo_menu(&repo, &config.menu.default_menu).await? {
            info!("Demo menu seeded");
        }
    }

    // Routes and templates
    let routes = match RouteTable::from_settings(&config.routes) {
        Ok(routes) => routes,
        Err(e) => {
            error!("Invalid route configuration: {}", e);
            std::process::exit(1);
        }
    };
    if routes.is_empty() {
        warn!("No named routes configured, named menu links will render without a URL");
    } else {
        info!("Loaded {} named routes", routes.len());
    }

    let mut templates = HandlebarsMenuRenderer::new()?;
    if let Some(dir) = config.menu.templates_dir.as_deref() {
        templates = templates.with_templates_dir(Path::new(dir))?;
    }
    if !templates.has_template(&config.menu.default_template) {
        error!("Default menu template not registered: {}", config.menu.default_template);
        std::process::exit(1);
    }
    let templates = Arc::new(templates);

    // Create App State
    let menu_repo: Arc<dyn MenuRepository> = repo;
    let menu_service = MenuService::new(menu_repo, Arc::new(routes), templates.clone())
        .with_default_template(config.menu.default_template.clone());
    let state = AppState {
        menu_service: Arc::new(menu_service),
        templates,
        default_menu: config.menu.default_menu.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
