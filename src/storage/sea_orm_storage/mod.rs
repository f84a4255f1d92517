//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod class_teachings;
mod classes;
mod directory;
mod exams;
mod placement;
mod token_blacklist;
mod users;

use crate::config::AppConfig;
use crate::errors::{CampusError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CampusError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CampusError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 内存 SQLite，仅用于测试
    #[cfg(test)]
    pub(crate) async fn new_in_memory() -> Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        // 单连接，保证所有查询落在同一个内存库上
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| CampusError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| CampusError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }
}

/// 是否为唯一约束冲突
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // token 黑名单
    async fn blacklist_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<()> {
        self.blacklist_token_impl(jti, user_id, expires_at).await
    }

    async fn is_token_blacklisted(&self, jti: &str) -> Result<bool> {
        self.is_token_blacklisted_impl(jti).await
    }

    async fn purge_expired_tokens(&self) -> Result<u64> {
        self.purge_expired_tokens_impl().await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_user_classes(&self, user_id: i64) -> Result<Vec<(Class, ClassRole)>> {
        self.list_user_classes_impl(user_id).await
    }

    // 班级成员模块
    async fn get_class_teaching(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassTeaching>> {
        self.get_class_teaching_impl(user_id, class_id).await
    }

    async fn has_class_role(&self, user_id: i64, class_id: i64, role: ClassRole) -> Result<bool> {
        self.has_class_role_impl(user_id, class_id, role).await
    }

    async fn add_class_member(
        &self,
        class_id: i64,
        user_id: i64,
        role: ClassRole,
    ) -> Result<ClassTeaching> {
        self.add_class_member_impl(class_id, user_id, role).await
    }

    async fn list_class_members(&self, class_id: i64) -> Result<Vec<(ClassTeaching, User)>> {
        self.list_class_members_impl(class_id).await
    }

    // 科目模块
    async fn create_subject(
        &self,
        class_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Subject> {
        self.create_subject_impl(class_id, name, description).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_class_subjects(&self, class_id: i64) -> Result<Vec<Subject>> {
        self.list_class_subjects_impl(class_id).await
    }

    // 考试模块
    async fn create_exam(
        &self,
        class_id: i64,
        subject_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Exam> {
        self.create_exam_impl(class_id, subject_id, name, description)
            .await
    }

    async fn get_exam_by_id(&self, exam_id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(exam_id).await
    }

    async fn list_subject_exams(&self, subject_id: i64) -> Result<Vec<Exam>> {
        self.list_subject_exams_impl(subject_id).await
    }

    async fn publish_exam_results(
        &self,
        exam_id: i64,
        entries: Vec<PublishResultEntry>,
    ) -> Result<ExamResult> {
        self.publish_exam_results_impl(exam_id, entries).await
    }

    async fn get_exam_result(&self, exam_id: i64) -> Result<Option<ExamResult>> {
        self.get_exam_result_impl(exam_id).await
    }

    // 就业模块
    async fn create_placement_profile(
        &self,
        user_id: i64,
        cgpa: f64,
        percentage_10th: f64,
        percentage_12th: f64,
    ) -> Result<PlacementProfile> {
        self.create_placement_profile_impl(user_id, cgpa, percentage_10th, percentage_12th)
            .await
    }

    async fn get_placement_profile(&self, user_id: i64) -> Result<Option<PlacementProfile>> {
        self.get_placement_profile_impl(user_id).await
    }

    async fn set_placement_coordinator(&self, user_id: i64, value: bool) -> Result<bool> {
        self.set_placement_coordinator_impl(user_id, value).await
    }

    async fn create_placement_company(
        &self,
        company: CreateCompanyRequest,
    ) -> Result<PlacementCompany> {
        self.create_placement_company_impl(company).await
    }

    async fn get_placement_company(&self, company_id: i64) -> Result<Option<PlacementCompany>> {
        self.get_placement_company_impl(company_id).await
    }

    async fn list_placement_companies(&self) -> Result<Vec<PlacementCompany>> {
        self.list_placement_companies_impl().await
    }

    async fn list_applied_company_ids(&self, user_id: i64) -> Result<Vec<i64>> {
        self.list_applied_company_ids_impl(user_id).await
    }

    async fn apply_to_company(
        &self,
        user_id: i64,
        company_id: i64,
    ) -> Result<PlacementApplication> {
        self.apply_to_company_impl(user_id, company_id).await
    }

    async fn list_company_applications(
        &self,
        company_id: i64,
    ) -> Result<Vec<(PlacementApplication, User)>> {
        self.list_company_applications_impl(company_id).await
    }

    // 名录模块
    async fn create_faculty(&self, req: FacultyRequest) -> Result<Faculty> {
        self.create_faculty_impl(req).await
    }

    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_id_impl(id).await
    }

    async fn list_faculty(&self, page: u64, size: u64) -> Result<PaginatedResponse<Faculty>> {
        self.list_faculty_impl(page, size).await
    }

    async fn update_faculty(&self, id: i64, req: FacultyRequest) -> Result<Option<Faculty>> {
        self.update_faculty_impl(id, req).await
    }

    async fn delete_faculty(&self, id: i64) -> Result<bool> {
        self.delete_faculty_impl(id).await
    }

    async fn create_research(&self, req: ResearchRequest) -> Result<Research> {
        self.create_research_impl(req).await
    }

    async fn get_research_by_id(&self, id: i64) -> Result<Option<Research>> {
        self.get_research_by_id_impl(id).await
    }

    async fn list_research(&self, page: u64, size: u64) -> Result<PaginatedResponse<Research>> {
        self.list_research_impl(page, size).await
    }

    async fn update_research(&self, id: i64, req: ResearchRequest) -> Result<Option<Research>> {
        self.update_research_impl(id, req).await
    }

    async fn delete_research(&self, id: i64) -> Result<bool> {
        self.delete_research_impl(id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SeaOrmStorage;
    use migration::{Migrator, MigratorTrait};
    use crate::models::users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    };

    pub async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_in_memory()
            .await
            .expect("in-memory storage")
    }

    /// 文件型 SQLite（生产同款 WAL 连接池），用于并发写入测试
    pub async fn file_storage() -> SeaOrmStorage {
        let path = std::env::temp_dir().join(format!("campus-test-{}.db", uuid::Uuid::new_v4()));
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let db = SeaOrmStorage::connect_sqlite(&url, crate::config::AppConfig::get())
            .await
            .expect("file storage");
        Migrator::up(&db, None).await.expect("migrations");
        SeaOrmStorage { db }
    }

    pub async fn user(storage: &SeaOrmStorage, name: &str) -> User {
        storage
            .create_user_impl(CreateUserRequest {
                username: name.to_string(),
                email: format!("{name}@example.com"),
                password: "hash".to_string(),
                first_name: name.to_string(),
                last_name: String::new(),
                role: UserRole::User,
            })
            .await
            .expect("create user")
    }

    /// 测试请求用的 Authorization 头
    pub fn bearer(user: &User) -> (&'static str, String) {
        let token =
            crate::utils::jwt::JwtUtils::generate_access_token(user.id, &user.role.to_string())
                .expect("access token");
        ("Authorization", format!("Bearer {token}"))
    }
}
