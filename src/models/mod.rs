//! 数据模型定义
//!
//! 每个业务模块按 `entities`（业务实体）、`requests`（请求体）、`responses`（响应体）拆分。

pub mod auth;
pub mod class_teachings;
pub mod classes;
pub mod common;
pub mod directory;
pub mod exams;
pub mod placement;
pub mod users;

pub use common::{
    ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery,
};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
