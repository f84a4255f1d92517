use std::sync::Arc;

use crate::models::{
    PaginatedResponse,
    class_teachings::entities::{ClassRole, ClassTeaching},
    classes::{
        entities::{Class, Subject},
        requests::CreateClassRequest,
    },
    directory::{
        entities::{Faculty, Research},
        requests::{FacultyRequest, ResearchRequest},
    },
    exams::{
        entities::{Exam, ExamResult},
        requests::PublishResultEntry,
    },
    placement::{
        entities::{PlacementApplication, PlacementCompany, PlacementProfile},
        requests::CreateCompanyRequest,
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// refresh token 黑名单
    async fn blacklist_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()>;
    async fn is_token_blacklisted(&self, jti: &str) -> Result<bool>;
    // 清理已过期的黑名单记录
    async fn purge_expired_tokens(&self) -> Result<u64>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出用户所在的班级及角色
    async fn list_user_classes(&self, user_id: i64) -> Result<Vec<(Class, ClassRole)>>;

    /// 班级成员方法
    // 获取用户在班级中的成员关系
    async fn get_class_teaching(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassTeaching>>;
    // 用户在班级中是否具有指定角色
    async fn has_class_role(&self, user_id: i64, class_id: i64, role: ClassRole) -> Result<bool>;
    // 添加班级成员，重复加入返回 Conflict
    async fn add_class_member(
        &self,
        class_id: i64,
        user_id: i64,
        role: ClassRole,
    ) -> Result<ClassTeaching>;
    // 列出班级成员
    async fn list_class_members(&self, class_id: i64) -> Result<Vec<(ClassTeaching, User)>>;

    /// 科目方法
    async fn create_subject(&self, class_id: i64, name: &str, description: &str)
    -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn list_class_subjects(&self, class_id: i64) -> Result<Vec<Subject>>;

    /// 考试与成绩方法
    async fn create_exam(
        &self,
        class_id: i64,
        subject_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Exam>;
    async fn get_exam_by_id(&self, exam_id: i64) -> Result<Option<Exam>>;
    async fn list_subject_exams(&self, subject_id: i64) -> Result<Vec<Exam>>;
    // 批量写入成绩（全部成功或全部不写）
    async fn publish_exam_results(
        &self,
        exam_id: i64,
        entries: Vec<PublishResultEntry>,
    ) -> Result<ExamResult>;
    async fn get_exam_result(&self, exam_id: i64) -> Result<Option<ExamResult>>;

    /// 就业模块
    async fn create_placement_profile(
        &self,
        user_id: i64,
        cgpa: f64,
        percentage_10th: f64,
        percentage_12th: f64,
    ) -> Result<PlacementProfile>;
    async fn get_placement_profile(&self, user_id: i64) -> Result<Option<PlacementProfile>>;
    // 设置就业协调员标记（管理员）
    async fn set_placement_coordinator(&self, user_id: i64, value: bool) -> Result<bool>;
    async fn create_placement_company(
        &self,
        company: CreateCompanyRequest,
    ) -> Result<PlacementCompany>;
    async fn get_placement_company(&self, company_id: i64) -> Result<Option<PlacementCompany>>;
    async fn list_placement_companies(&self) -> Result<Vec<PlacementCompany>>;
    // 用户已投递的公司 ID
    async fn list_applied_company_ids(&self, user_id: i64) -> Result<Vec<i64>>;
    // 投递（事务内完成校验与写入）
    async fn apply_to_company(&self, user_id: i64, company_id: i64)
    -> Result<PlacementApplication>;
    async fn list_company_applications(
        &self,
        company_id: i64,
    ) -> Result<Vec<(PlacementApplication, User)>>;

    /// 名录：教师
    async fn create_faculty(&self, req: FacultyRequest) -> Result<Faculty>;
    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>>;
    async fn list_faculty(&self, page: u64, size: u64) -> Result<PaginatedResponse<Faculty>>;
    async fn update_faculty(&self, id: i64, req: FacultyRequest) -> Result<Option<Faculty>>;
    async fn delete_faculty(&self, id: i64) -> Result<bool>;

    /// 名录：科研
    async fn create_research(&self, req: ResearchRequest) -> Result<Research>;
    async fn get_research_by_id(&self, id: i64) -> Result<Option<Research>>;
    async fn list_research(&self, page: u64, size: u64) -> Result<PaginatedResponse<Research>>;
    async fn update_research(&self, id: i64, req: ResearchRequest) -> Result<Option<Research>>;
    async fn delete_research(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
