//! Menu endpoints: annotated tree as JSON, rendered fragment as HTML.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use menu_core::domain::{CurrentRequest, MenuNode};

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Path the menu is drawn for; no active items when absent.
    pub path: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MenuTreeResponse {
    pub menu_name: String,
    pub request: Option<CurrentRequest>,
    pub nodes: usize,
    pub active_ids: Vec<i64>,
    pub tree: Vec<MenuNode>,
}

/// GET /api/v1/menus/{menu_name}/tree
pub async fn menu_tree(
    State(state): State<AppState>,
    Path(menu_name): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Json<ApiResponse<MenuTreeResponse>>, ApiError> {
    let request = query.path.as_deref().map(|path| state.current_request(path));
    let tree = state
        .menu_service
        .load_tree(&menu_name, request.as_ref())
        .await?;

    Ok(Json(ApiResponse::success(MenuTreeResponse {
        menu_name,
        request,
        nodes: tree.len(),
        active_ids: tree.active_ids(),
        tree: tree.roots,
    })))
}

/// GET /api/v1/menus/{menu_name}/render
pub async fn render_menu(
    State(state): State<AppState>,
    Path(menu_name): Path<String>,
    Query(query): Query<MenuQuery>,
) -> Result<Html<String>, ApiError> {
    if let Some(template) = query.template.as_deref() {
        if !state.templates.has_template(template) {
            return Err(ApiError::BadRequest(format!("Unknown template: {}", template)));
        }
    }

    let request = query.path.as_deref().map(|path| state.current_request(path));
    let html = state
        .menu_service
        .draw_menu(&menu_name, query.template.as_deref(), request.as_ref())
        .await?;

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use crate::routes::build_router;
    use crate::state::tests::{body_string, test_state};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_tree_marks_active_path() {
        let (state, repo) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/main_menu/tree?path=/about/team")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["nodes"], 3);
        assert_eq!(body["data"]["active_ids"], serde_json::json!([3]));
        assert_eq!(body["data"]["tree"][1]["expanded"], true);
        assert_eq!(body["data"]["tree"][1]["children"][0]["url"], "/about/team/");
        assert_eq!(body["data"]["tree"][0]["url"], "/");
        assert_eq!(repo.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_tree_named_route_activation() {
        let (state, _) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/main_menu/tree?path=/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["data"]["request"]["route"]["route_name"], "home");
        assert_eq!(body["data"]["active_ids"], serde_json::json!([1]));
    }

    #[tokio::test]
    async fn test_tree_path_query_string_is_ignored() {
        let (state, _) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/main_menu/tree?path=/about/%3Fx%3D1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["data"]["request"]["path"], "/about/");
        assert_eq!(body["data"]["request"]["route"]["route_name"], "about");
        assert_eq!(body["data"]["active_ids"], serde_json::json!([2]));
    }

    #[tokio::test]
    async fn test_render_without_path_has_no_active_items() {
        let (state, repo) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/main_menu/render")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/about/">About</a>"#));
        assert!(!html.contains("active"));
        assert!(!html.contains("Team"));
        assert_eq!(repo.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_render_unknown_menu_is_empty() {
        let (state, _) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/footer/render?path=/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn test_render_unknown_template_is_bad_request() {
        let (state, repo) = test_state();
        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menus/main_menu/render?template=sidebar")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(repo.fetch_count(), 0);
    }
}
