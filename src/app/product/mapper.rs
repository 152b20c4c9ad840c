//! 商品持久化网关
//!
//! 所有写操作都先经过拦截器链，再交给底层 [`ProductStore`] 执行。
//! `insert` 采用写回语义：调用返回后，传入的 `product` 上即可读到
//! id、uuid 与时间字段，调用方不应继续持有插入前的副本。

use std::sync::Arc;

use tracing::debug;

use super::error::Result;
use super::model::Product;
use super::store::ProductStore;
use crate::core::interceptor::{InterceptorChain, Parameter, SqlCommandType};

#[derive(Clone)]
pub struct ProductMapper {
    store: Arc<dyn ProductStore>,
    interceptors: InterceptorChain,
}

impl ProductMapper {
    /// 使用默认拦截器链（UUID 与时间填充）
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self::with_interceptors(store, InterceptorChain::default())
    }

    pub fn with_interceptors(store: Arc<dyn ProductStore>, interceptors: InterceptorChain) -> Self {
        Self {
            store,
            interceptors,
        }
    }

    fn before_write(&self, command: SqlCommandType, parameter: &mut dyn Parameter) {
        self.interceptors.intercept(command, parameter);
    }

    /// 插入商品，返回受影响行数
    pub async fn insert(&self, product: &mut Product) -> Result<u64> {
        self.before_write(SqlCommandType::Insert, product);
        let rows = self.store.insert(product).await?;
        debug!(uuid = ?product.base.uuid, id = ?product.base.id, "product inserted");
        Ok(rows)
    }

    pub async fn select_by_uuid(&self, uuid: &str) -> Result<Option<Product>> {
        self.store.select_by_uuid(uuid).await
    }

    /// 按 uuid 更新，只刷新 `updated_at`
    pub async fn update_by_uuid(&self, product: &mut Product) -> Result<u64> {
        self.before_write(SqlCommandType::Update, product);
        self.store.update_by_uuid(product).await
    }

    pub async fn delete_by_uuid(&self, uuid: &str) -> Result<u64> {
        let mut key = uuid.to_string();
        self.before_write(SqlCommandType::Delete, &mut key);
        self.store.delete_by_uuid(&key).await
    }
}

impl std::fmt::Debug for ProductMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductMapper")
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}
