//! Postgres 商品表

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{postgres::PgPool, FromRow};

use super::error::Result;
use super::model::{Product, DEFAULT_IS_AVAILABLE, DEFAULT_STOCK_QUANTITY};
use super::store::ProductStore;
use crate::core::entity::BaseEntity;

/// 商品表结构，可重复执行
pub const PRODUCT_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS product (
    id BIGSERIAL PRIMARY KEY,
    uuid VARCHAR(36) NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    price NUMERIC(12, 2) NOT NULL,
    stock_quantity INTEGER NOT NULL DEFAULT 0,
    is_available BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    deleted BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

const SELECT_COLUMNS: &str = "id, uuid, name, description, price, stock_quantity, \
                              is_available, created_at, updated_at, deleted";

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    uuid: String,
    name: String,
    description: Option<String>,
    price: Decimal,
    stock_quantity: i32,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            base: BaseEntity {
                id: Some(row.id),
                uuid: Some(row.uuid),
                created_at: Some(row.created_at),
                updated_at: Some(row.updated_at),
                deleted: Some(row.deleted),
            },
            name: Some(row.name),
            description: row.description,
            price: Some(row.price),
            stock_quantity: Some(row.stock_quantity),
            is_available: Some(row.is_available),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &mut Product) -> Result<u64> {
        let sql = format!(
            "INSERT INTO product (uuid, name, description, price, stock_quantity, is_available, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, {DEFAULT_STOCK_QUANTITY}), \
             COALESCE($6, {DEFAULT_IS_AVAILABLE}), $7, $8) \
             RETURNING {SELECT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(&product.base.uuid)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock_quantity)
            .bind(product.is_available)
            .bind(product.base.created_at)
            .bind(product.base.updated_at)
            .fetch_one(&self.pool)
            .await?;

        *product = row.into();
        Ok(1)
    }

    async fn select_by_uuid(&self, uuid: &str) -> Result<Option<Product>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM product WHERE uuid = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Product::from))
    }

    async fn update_by_uuid(&self, product: &Product) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE product SET name = $1, description = $2, price = $3, \
             stock_quantity = COALESCE($4, stock_quantity), \
             is_available = COALESCE($5, is_available), updated_at = $6 \
             WHERE uuid = $7",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock_quantity)
        .bind(product.is_available)
        .bind(product.base.updated_at)
        .bind(&product.base.uuid)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_by_uuid(&self, uuid: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM product WHERE uuid = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
