//! 写入拦截器
//!
//! 网关的每一次写操作（插入、更新、删除）在执行语句之前都会经过
//! [`InterceptorChain`]。拦截器只处理能够暴露 [`BaseEntity`] 的参数，
//! 其余参数原样放行。

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use super::entity::BaseEntity;

/// 写操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlCommandType {
    Insert,
    Update,
    Delete,
}

/// 写操作参数
///
/// 实现者若携带审计字段，应返回其 [`BaseEntity`] 的可变引用。
pub trait Parameter {
    fn base_entity_mut(&mut self) -> Option<&mut BaseEntity> {
        None
    }
}

impl Parameter for String {}

/// 写入拦截器
pub trait Interceptor: Send + Sync {
    fn intercept(&self, command: SqlCommandType, parameter: &mut dyn Parameter);
}

/// 插入时生成 UUID
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoUuidInterceptor;

impl Interceptor for AutoUuidInterceptor {
    fn intercept(&self, command: SqlCommandType, parameter: &mut dyn Parameter) {
        if command != SqlCommandType::Insert {
            return;
        }
        if let Some(base) = parameter.base_entity_mut() {
            base.uuid = Some(Uuid::new_v4().to_string());
        }
    }
}

/// 插入时填充创建/更新时间，更新时只刷新更新时间
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoFillTimeInterceptor;

impl Interceptor for AutoFillTimeInterceptor {
    fn intercept(&self, command: SqlCommandType, parameter: &mut dyn Parameter) {
        let Some(base) = parameter.base_entity_mut() else {
            return;
        };
        let now = BaseEntity::now();
        match command {
            SqlCommandType::Insert => {
                base.created_at = Some(now);
                base.updated_at = Some(now);
            }
            SqlCommandType::Update => base.updated_at = Some(now),
            SqlCommandType::Delete => {}
        }
    }
}

/// 按注册顺序执行的拦截器链
#[derive(Clone)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChain {
    /// 空链，写操作不做任何填充
    pub fn empty() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    pub fn with(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    pub fn intercept(&self, command: SqlCommandType, parameter: &mut dyn Parameter) {
        for interceptor in &self.interceptors {
            interceptor.intercept(command, parameter);
        }
    }
}

impl Default for InterceptorChain {
    fn default() -> Self {
        Self::empty()
            .with(AutoUuidInterceptor)
            .with(AutoFillTimeInterceptor)
    }
}

impl fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}
