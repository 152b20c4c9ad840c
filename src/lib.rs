//! # 商品目录服务
//!
//! 一个精简的商品 CRUD 服务：
//! - 实体基类与写入拦截器，插入/更新时自动填充 uuid 与时间字段
//! - 持久化网关，支持内存与 Postgres 两种存储
//! - 模型、入参、输出之间的纯函数转换
//! - 业务服务层与 axum HTTP 处理器

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::product::error::{InvalidField, ProductError};
pub use app::product::mapper::ProductMapper;
pub use app::product::model::{Product, ProductCreateDto, ProductVo};
pub use app::product::service::ProductService;
pub use app::product::store::{MemoryProductStore, ProductStore};
