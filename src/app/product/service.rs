//! 商品业务服务

use tracing::{debug, info};

use super::convert;
use super::error::{InvalidField, ProductError, Result};
use super::mapper::ProductMapper;
use super::model::{Product, ProductCreateDto, ProductVo, NAME_MAX_LENGTH};

#[derive(Clone, Debug)]
pub struct ProductService {
    mapper: ProductMapper,
}

impl ProductService {
    pub fn new(mapper: ProductMapper) -> Self {
        Self { mapper }
    }

    /// 创建商品，返回新商品的 uuid
    ///
    /// 校验独立于 [`ProductCreateDto`] 上的注解，按名称、价格、库存的顺序进行，
    /// 第一个不通过的字段决定返回的错误。
    pub async fn create_product(&self, params: ProductCreateDto) -> Result<String> {
        debug!(?params, "createProduct");
        validate(&params)?;

        let mut product = convert::to_model(params)?;
        self.mapper.insert(&mut product).await?;

        let uuid = product.base.uuid.ok_or_else(|| {
            ProductError::StoreConstraint("uuid was not written back on insert".to_string())
        })?;
        info!("Product created with UUID: {}", uuid);
        Ok(uuid)
    }

    /// 仅供内部调用，目前未实现，总是返回 `None`
    pub async fn get_product_by_id(&self, id: &str) -> Result<Option<Product>> {
        debug!(id, "getProductById is not implemented");
        Ok(None)
    }

    /// 按 uuid 查询商品，未找到时返回 `None`
    pub async fn get_product_by_uuid(&self, uuid: &str) -> Result<Option<ProductVo>> {
        debug!(uuid, "getProductByUuid");
        let Some(product) = self.mapper.select_by_uuid(uuid).await? else {
            debug!("{} not found", uuid);
            return Ok(None);
        };

        let vo = convert::to_vo(product);
        info!(?vo, "Product found");
        Ok(Some(vo))
    }
}

fn validate(params: &ProductCreateDto) -> Result<()> {
    let name_blank = params
        .name
        .as_deref()
        .map_or(true, |name| name.trim().is_empty());
    if name_blank {
        return Err(ProductError::Validation(InvalidField::NameBlank));
    }

    if params
        .name
        .as_deref()
        .is_some_and(|name| name.chars().count() > NAME_MAX_LENGTH)
    {
        return Err(ProductError::Validation(InvalidField::NameTooLong));
    }

    // 与映射层共用同一解析规则，无法解析的价格同样视为不合法
    let price_valid = params
        .price
        .as_deref()
        .is_some_and(|price| convert::parse_price(price).is_ok());
    if !price_valid {
        return Err(ProductError::Validation(InvalidField::PriceInvalid));
    }

    if !params.stock_quantity.is_some_and(|stock| stock >= 0) {
        return Err(ProductError::Validation(InvalidField::StockInvalid));
    }

    Ok(())
}
