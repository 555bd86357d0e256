use axum::{
    Json,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::report::{self, ReportEntry};

#[derive(Debug, Default, Deserialize)]
pub struct NodeQuery {
    #[serde(default)]
    pub node: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub async fn handle_list_reports() -> Json<Vec<ReportEntry>> {
    Json(report::catalog())
}

pub async fn handle_get_page(
    Path((report, page)): Path<(String, String)>,
    Query(query): Query<NodeQuery>,
) -> Response {
    match report::render_by_id(&report, &page, query.node.as_deref()) {
        Ok(view) => Json(view).into_response(),
        Err(e) => {
            tracing::warn!("rejected {}/{}: {}", report, page, e);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn handle_healthz() -> &'static str {
    "ok\n"
}
