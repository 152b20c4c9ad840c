//! 商品表存储
//!
//! [`ProductStore`] 只负责执行语句，不做任何自动填充；标识与时间字段由
//! [`ProductMapper`](super::mapper::ProductMapper) 的拦截器链在写入前设置。

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::error::{ProductError, Result};
use super::model::{
    max_price, Product, DEFAULT_IS_AVAILABLE, DEFAULT_STOCK_QUANTITY, NAME_MAX_LENGTH,
    PRICE_SCALE,
};

/// 商品表的原始读写操作
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 插入一行，并把存储层分配的 id 以及默认值写回 `product`
    async fn insert(&self, product: &mut Product) -> Result<u64>;

    /// 按 uuid 查询，无匹配时返回 `None`
    async fn select_by_uuid(&self, uuid: &str) -> Result<Option<Product>>;

    /// 按 uuid 更新业务字段与 `updated_at`
    async fn update_by_uuid(&self, product: &Product) -> Result<u64>;

    async fn delete_by_uuid(&self, uuid: &str) -> Result<u64>;
}

/// 基于内存的商品表
///
/// 与 Postgres 表保持相同的约束：`name`、`price`、`uuid` 非空，`uuid` 唯一，
/// `name` 不超过 [`NAME_MAX_LENGTH`] 个字符，`price` 不超出 `NUMERIC(12, 2)`，
/// 库存与上架状态缺省时使用列默认值。
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: RwLock<HashMap<String, Product>>,
    sequence: AtomicI64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

fn not_null(column: &str) -> ProductError {
    ProductError::StoreConstraint(format!(
        "null value in column \"{column}\" violates not-null constraint"
    ))
}

/// 按列类型检查名称长度与价格范围，并把价格调整到列的小数位数
fn check_columns(name: &str, mut price: Decimal) -> Result<Decimal> {
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(ProductError::StoreConstraint(format!(
            "value too long for type character varying({NAME_MAX_LENGTH})"
        )));
    }
    price.rescale(PRICE_SCALE);
    if price.abs() >= max_price() {
        return Err(ProductError::StoreConstraint(
            "numeric field overflow for column \"price\"".to_string(),
        ));
    }
    Ok(price)
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: &mut Product) -> Result<u64> {
        let uuid = product.base.uuid.clone().ok_or_else(|| not_null("uuid"))?;
        let name = product.name.as_deref().ok_or_else(|| not_null("name"))?;
        let price = product.price.ok_or_else(|| not_null("price"))?;
        let price = check_columns(name, price)?;
        let (Some(created_at), Some(updated_at)) =
            (product.base.created_at, product.base.updated_at)
        else {
            return Err(not_null("created_at"));
        };

        let mut rows = self.rows.write().await;
        if rows.contains_key(&uuid) {
            return Err(ProductError::StoreConstraint(format!(
                "duplicate key value violates unique constraint: uuid={uuid}"
            )));
        }

        let mut row = product.clone();
        row.base.id = Some(self.sequence.fetch_add(1, Ordering::SeqCst) + 1);
        row.base.created_at = Some(created_at);
        row.base.updated_at = Some(updated_at);
        row.base.deleted = Some(product.base.deleted.unwrap_or(false));
        row.price = Some(price);
        row.stock_quantity = Some(product.stock_quantity.unwrap_or(DEFAULT_STOCK_QUANTITY));
        row.is_available = Some(product.is_available.unwrap_or(DEFAULT_IS_AVAILABLE));

        *product = row.clone();
        rows.insert(uuid, row);
        Ok(1)
    }

    async fn select_by_uuid(&self, uuid: &str) -> Result<Option<Product>> {
        Ok(self.rows.read().await.get(uuid).cloned())
    }

    async fn update_by_uuid(&self, product: &Product) -> Result<u64> {
        let Some(uuid) = product.base.uuid.as_deref() else {
            return Ok(0);
        };
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(uuid) else {
            return Ok(0);
        };

        let name = product.name.clone().ok_or_else(|| not_null("name"))?;
        let price = product.price.ok_or_else(|| not_null("price"))?;
        let price = check_columns(&name, price)?;
        let updated_at = product.base.updated_at.ok_or_else(|| not_null("updated_at"))?;

        row.name = Some(name);
        row.description = product.description.clone();
        row.price = Some(price);
        if let Some(stock_quantity) = product.stock_quantity {
            row.stock_quantity = Some(stock_quantity);
        }
        if let Some(is_available) = product.is_available {
            row.is_available = Some(is_available);
        }
        row.base.updated_at = Some(updated_at);
        Ok(1)
    }

    async fn delete_by_uuid(&self, uuid: &str) -> Result<u64> {
        Ok(self.rows.write().await.remove(uuid).map_or(0, |_| 1))
    }
}
