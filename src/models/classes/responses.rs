use super::entities::{Class, Subject};
use crate::models::{class_teachings::entities::ClassRole, users::entities::UserSummary};
use serde::Serialize;

// 班级简要信息
#[derive(Debug, Clone, Serialize)]
pub struct ClassBrief {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Class> for ClassBrief {
    fn from(class: Class) -> Self {
        Self {
            id: class.id,
            name: class.name,
            description: class.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectBrief {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Subject> for SubjectBrief {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            description: subject.description,
        }
    }
}

// 当前用户所在的班级及其角色
#[derive(Debug, Clone, Serialize)]
pub struct UserClassItem {
    #[serde(flatten)]
    pub class: ClassBrief,
    pub role: ClassRole,
}

#[derive(Debug, Serialize)]
pub struct UserClassesResponse {
    pub classes: Vec<UserClassItem>,
}

// 班级详情：班级 + 教师 + 学生 + 科目
#[derive(Debug, Serialize)]
pub struct ClassDetailResponse {
    pub class: ClassBrief,
    pub teachers: Vec<UserSummary>,
    pub students: Vec<UserSummary>,
    pub subjects: Vec<SubjectBrief>,
}

#[derive(Debug, Serialize)]
pub struct ClassRoleResponse {
    pub role: ClassRole,
}

// 成员加入班级后的响应
#[derive(Debug, Serialize)]
pub struct ClassMemberResponse {
    pub class_id: i64,
    pub user: UserSummary,
    pub role: ClassRole,
}
