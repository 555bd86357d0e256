pub mod api;
pub mod ui;

use axum::{
    Router,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // JSON views
        .route("/api/v1/reports", get(api::handle_list_reports))
        .route("/api/v1/reports/{report}/{page}", get(api::handle_get_page))
        // Health
        .route("/healthz", get(api::handle_healthz))
        // Dashboard UI
        .route("/ui/", get(ui::handle_index))
        .route("/ui/{report}", get(ui::handle_report))
        .route("/ui/{report}/{page}", get(ui::handle_page))
        // Static files
        .nest_service("/ui/static", ServeDir::new("static"))
        // Root redirect
        .route(
            "/",
            get(|| async {
                axum::response::Redirect::to("/ui/")
            }),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState {
            config: Arc::new(Config::default()),
        })
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn healthz_returns_ok() {
        let (status, body) = get("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok\n");
    }

    #[tokio::test]
    async fn root_redirects_to_ui() {
        let (status, _) = get("/").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn report_root_redirects_to_summary() {
        let response = app()
            .oneshot(Request::builder().uri("/ui/status").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/ui/status/summary");
    }

    #[tokio::test]
    async fn index_lists_every_page() {
        let (status, body) = get("/ui/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/ui/comparison/node-detail"));
        assert!(body.contains("/ui/status/technical-deep-dive"));
    }

    #[tokio::test]
    async fn node_detail_page_renders_selected_node() {
        let (status, body) = get("/ui/comparison/node-detail?node=vmss00004q").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Node: aks-easv4serina-28315746-vmss00004q"));
        assert!(body.contains("-2797Mi"));
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let (status, body) = get("/ui/comparison/weekly").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("unknown page"));

        let (status, _) = get("/ui/status/node-detail").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get("/ui/comparison/node-detail?node=vmss9999zz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn api_serves_page_view_json() {
        let (status, body) = get("/api/v1/reports/comparison/node-detail?node=vmss0000bm").await;
        assert_eq!(status, StatusCode::OK);
        let view: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(view["report"], "comparison");
        assert_eq!(view["page"], "node-detail");
        assert_eq!(view["sections"][0]["blocks"][1]["type"], "metrics");
        assert_eq!(view["sections"][0]["blocks"][1]["items"][0]["delta"], "-2775Mi");
    }

    #[tokio::test]
    async fn api_rejects_unknown_report() {
        let (status, body) = get("/api/v1/reports/weekly/summary").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let err: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(err["error"].as_str().unwrap().contains("unknown report"));
    }

    #[tokio::test]
    async fn api_pages_are_identical_across_requests() {
        let (_, a) = get("/api/v1/reports/status/performance-impact").await;
        let (_, b) = get("/api/v1/reports/status/performance-impact").await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn api_catalog_lists_reports() {
        let (status, body) = get("/api/v1/reports").await;
        assert_eq!(status, StatusCode::OK);
        let cat: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(cat[0]["id"], "comparison");
        assert_eq!(cat[1]["pages"].as_array().unwrap().len(), 8);
    }
}
