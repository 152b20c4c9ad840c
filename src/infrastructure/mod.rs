//! 基础设施：日志与数据库连接

pub mod logger;

#[cfg(feature = "database")]
pub mod database;
