//! 商品 HTTP 处理器

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use validator::Validate;

use super::model::{ProductCreateDto, ProductVo};
use super::service::ProductService;
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/products", post(create_product))
        .route("/products/:uuid", get(get_product))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
    }))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductCreateDto>,
) -> Result<Json<ApiResponse<String>>, CoreError> {
    payload.validate()?;
    let uuid = state.product_service.create_product(payload).await?;
    Ok(Json(ApiResponse::success(uuid)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<ApiResponse<ProductVo>>, CoreError> {
    let product = state
        .product_service
        .get_product_by_uuid(&uuid)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("商品不存在: {uuid}")))?;
    Ok(Json(ApiResponse::success(product)))
}
