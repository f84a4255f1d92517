use super::entities::{Exam, ExamResultMap};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExamCreatedResponse {
    pub exam: Exam,
}

// 查看成绩
#[derive(Debug, Serialize)]
pub struct ExamResultsResponse {
    pub exam: String,
    pub subject: String,
    pub results: ExamResultMap,
}

#[derive(Debug, Serialize)]
pub struct SubjectExamItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub class_assigned: String,
    pub subject: String,
}

// 科目下的考试列表
#[derive(Debug, Serialize)]
pub struct SubjectExamsResponse {
    pub subject: String,
    pub exams: Vec<SubjectExamItem>,
}
