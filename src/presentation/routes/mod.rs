// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::site_repository::SiteRepository;
use crate::presentation::handlers::{analytics_handler, site_handler};
use crate::queue::job_queue::JobQueue;
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 不带任何依赖，调用方需要通过 `Extension` 注入仓库和队列
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/sites/generate", post(site_handler::generate_site))
        .route("/api/sites", get(site_handler::list_sites))
        .route("/api/sites/{id}", get(site_handler::get_site))
        .route("/api/analytics/dashboard", get(analytics_handler::dashboard))
}

/// 创建注入了依赖和通用中间件的完整应用
pub fn app(repository: Arc<dyn SiteRepository>, queue: Arc<dyn JobQueue>) -> Router {
    routes()
        .layer(Extension(repository))
        .layer(Extension(queue))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// 健康检查端点
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
