//! 业务应用模块

pub mod product;

use std::time::Duration;

use axum::{middleware, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::core::middleware::request_logging_middleware;
use product::{handler, service::ProductService};

/// 组装完整路由及公共中间件
pub fn build_router(product_service: ProductService, timeout: Duration) -> Router {
    handler::routes()
        .with_state(handler::AppState { product_service })
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
}
