use serde::Deserialize;

// 创建班级请求（仅管理员）
#[derive(Debug, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// 指派教师请求（仅管理员）
#[derive(Debug, Deserialize)]
pub struct AddTeacherRequest {
    pub teacher_email: Option<String>,
}

// 添加学生请求
#[derive(Debug, Deserialize)]
pub struct AddStudentRequest {
    pub student_email: Option<String>,
}

// 添加科目请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}
