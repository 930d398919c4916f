use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::AppError,
    routes::marker::model::{AddMarkerRequest, AddMarkerResponse, MarkerDetail, MarkerSummary},
};

// 获取标记列表
#[axum::debug_handler]
pub async fn list_markers(
    State(state): State<AppState>,
) -> Result<Json<Vec<MarkerSummary>>, AppError> {
    Ok(Json(state.markers.get_all_markers_simple().await?))
}

// 保存标记，失败信息放在响应体里
#[axum::debug_handler]
pub async fn add_marker(
    State(state): State<AppState>,
    Json(request): Json<AddMarkerRequest>,
) -> Json<AddMarkerResponse> {
    Json(state.markers.add_marker(request).await)
}

#[axum::debug_handler]
pub async fn get_marker(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MarkerDetail>, AppError> {
    state
        .markers
        .get_marker(id)
        .await?
        .map(Json)
        .ok_or(AppError::MarkerNotFound(id))
}
