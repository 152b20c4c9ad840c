//! 商品目录：模型、映射、持久化网关、业务服务与 HTTP 处理器

pub mod convert;
pub mod error;
pub mod handler;
pub mod mapper;
pub mod model;
pub mod service;
pub mod store;

#[cfg(feature = "database")]
pub mod postgres;
