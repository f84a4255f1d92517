//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod class_teachings;
pub mod classes;
pub mod exam_results;
pub mod exams;
pub mod faculty;
pub mod placement_applications;
pub mod placement_companies;
pub mod placement_profiles;
pub mod research_profiles;
pub mod subjects;
pub mod token_blacklist;
pub mod users;
