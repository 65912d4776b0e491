//! Demo pages: any unmatched GET renders a page wrapped in the default menu.

use axum::{extract::State, http::Uri, response::Html};
use serde::Serialize;

use menu_shared::constants::PAGE_TEMPLATE_NAME;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    path: &'a str,
    menu: String,
}

pub async fn page(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, ApiError> {
    let request = state.request_for_uri(&uri);
    let path = request.path.as_str();

    let menu = state
        .menu_service
        .draw_menu(&state.default_menu, None, Some(&request))
        .await?;

    let title = request.route_name().unwrap_or(path);
    let html = state.templates.render_template(
        PAGE_TEMPLATE_NAME,
        &PageContext { title, path, menu },
    )?;

    Ok(Html(html))
}
