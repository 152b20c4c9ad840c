//! 实体基类
//!
//! 所有持久化记录共享的标识与审计字段。这些字段由写入拦截器和存储层负责填充，
//! 调用方在插入时不应自行设置。

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// 公共标识与审计字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseEntity {
    /// 存储层分配的内部主键，插入后不可变
    pub id: Option<i64>,
    /// 对外暴露的标识
    pub uuid: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// 软删除标记，插入时默认为 false
    pub deleted: Option<bool>,
}

impl BaseEntity {
    /// 写入时使用的当前时间
    ///
    /// 截断到微秒，与 `TIMESTAMPTZ` 的精度一致，保证写回值与读出值相等。
    pub fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
