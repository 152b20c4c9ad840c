//! 核心模块：实体基类、写入拦截、错误与响应封装

pub mod entity;
pub mod error;
pub mod interceptor;
pub mod middleware;
pub mod response;
