//! 商品模块错误类型

use thiserror::Error;

/// 校验失败的字段，按校验顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidField {
    #[error("name blank")]
    NameBlank,
    #[error("name too long")]
    NameTooLong,
    #[error("price invalid")]
    PriceInvalid,
    #[error("stock invalid")]
    StockInvalid,
}

#[derive(Debug, Error)]
pub enum ProductError {
    /// 输入不合法，调用方可修正
    #[error("validation error: {0}")]
    Validation(InvalidField),

    /// 持久化边界上的必填字段为空或唯一约束冲突
    #[error("store constraint violated: {0}")]
    StoreConstraint(String),

    /// 价格文本无法解析为非负小数
    #[error("invalid decimal: {0}")]
    Format(String),

    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

pub type Result<T> = std::result::Result<T, ProductError>;

#[cfg(feature = "database")]
impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            // 22001: string_data_right_truncation, 22003: numeric_value_out_of_range,
            // 23502: not_null_violation, 23505: unique_violation
            if is_constraint_code(db_err.code().as_deref()) {
                return ProductError::StoreConstraint(db_err.message().to_string());
            }
        }
        ProductError::Database(err)
    }
}

#[cfg(feature = "database")]
fn is_constraint_code(code: Option<&str>) -> bool {
    matches!(code, Some("22001" | "22003" | "23502" | "23505"))
}
