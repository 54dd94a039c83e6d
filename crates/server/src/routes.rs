use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::blood_bank::BloodBankStore;

pub mod entries;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router over the shared in-memory store
pub fn build_router(store: Arc<BloodBankStore>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(
            "/api/blood-bank",
            get(entries::list).post(entries::create),
        )
        .route("/api/blood-bank/search", get(entries::search))
        .route(
            "/api/blood-bank/:id",
            get(entries::get_by_id)
                .put(entries::update)
                .delete(entries::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 请求到达时打点
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
