//! 商品数据模型
//!
//! - [`Product`]：持久化模型
//! - [`ProductCreateDto`]：创建入参，价格以文本传输
//! - [`ProductVo`]：对外输出，使用 uuid 而不是内部 id

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::entity::BaseEntity;
use crate::core::interceptor::Parameter;

/// 价格列的总位数与小数位数，对应 `NUMERIC(12, 2)`
pub const PRICE_PRECISION: u32 = 12;
pub const PRICE_SCALE: u32 = 2;

/// 名称列长度，对应 `VARCHAR(255)`，按字符计
pub const NAME_MAX_LENGTH: usize = 255;

pub const DEFAULT_STOCK_QUANTITY: i32 = 0;
pub const DEFAULT_IS_AVAILABLE: bool = true;

/// 价格列能容纳的上界（不含）
pub fn max_price() -> Decimal {
    Decimal::from(10_i64.pow(PRICE_PRECISION - PRICE_SCALE))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub base: BaseEntity,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub is_available: Option<bool>,
}

impl Parameter for Product {
    fn base_entity_mut(&mut self) -> Option<&mut BaseEntity> {
        Some(&mut self.base)
    }
}

/// 创建商品参数
///
/// 这里的注解只在 HTTP 边界生效，服务层另有一套独立校验。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateDto {
    #[validate(length(min = 1, message = "Product name cannot be blank"))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub price: Option<String>,

    #[validate(range(min = 0, message = "Product stock quantity must be at least 0"))]
    pub stock_quantity: Option<i32>,

    pub is_available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVo {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// 文本形式，避免精度丢失
    pub price: Option<String>,
    pub stock_quantity: Option<i32>,
    pub is_available: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
