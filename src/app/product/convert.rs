//! 模型、入参与输出之间的转换
//!
//! 纯函数，无副作用。价格始终以 [`Decimal`] 处理，不经过浮点数。

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::{ProductError, Result};
use super::model::{max_price, Product, ProductCreateDto, ProductVo, PRICE_SCALE};

/// 解析非负价格文本
///
/// 只接受普通小数写法（不接受指数形式），小数位不超过 [`PRICE_SCALE`]，
/// 且能放进价格列，保证写入后读回的值与输入在数值上相等。
pub fn parse_price(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.contains(['e', 'E']) {
        return Err(ProductError::Format(format!("{text:?}: exponent not allowed")));
    }
    let price = Decimal::from_str(trimmed)
        .map_err(|e| ProductError::Format(format!("{text:?}: {e}")))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::Format(format!("{text:?}: negative price")));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ProductError::Format(format!(
            "{text:?}: more than {PRICE_SCALE} fractional digits"
        )));
    }
    if price.abs() >= max_price() {
        return Err(ProductError::Format(format!("{text:?}: price too large")));
    }
    // "-0.00" 归一为 "0.00"
    Ok(price.abs())
}

/// 创建参数 -> 持久化模型
///
/// 标识与时间字段保持为空，由网关在写入时填充。
pub fn to_model(dto: ProductCreateDto) -> Result<Product> {
    let price = dto.price.as_deref().map(parse_price).transpose()?;

    Ok(Product {
        base: Default::default(),
        name: dto.name,
        description: dto.description,
        price,
        stock_quantity: dto.stock_quantity,
        is_available: dto.is_available,
    })
}

/// 持久化模型 -> 对外输出
pub fn to_vo(product: Product) -> ProductVo {
    ProductVo {
        uuid: product.base.uuid,
        name: product.name,
        description: product.description,
        price: product.price.map(|price| price.to_string()),
        stock_quantity: product.stock_quantity,
        is_available: product.is_available,
        created_at: product.base.created_at,
        updated_at: product.base.updated_at,
    }
}
