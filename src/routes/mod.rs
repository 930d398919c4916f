pub mod marker;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{AppState, config::Config, middleware::log_errors};

// 标记相关的路由
fn marker_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/markers",
            get(marker::list_markers).post(marker::add_marker),
        )
        .route("/markers/{id}", get(marker::get_marker))
}

// 前端页面跨域直接调用接口；未配置来源时放开所有来源
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// 挂在 `api_base_uri` 下的完整路由，带错误日志和 CORS 中间件
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .nest(&state.config.api_base_uri, marker_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(cors)
        .with_state(state)
}
