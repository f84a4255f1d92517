use serde::Deserialize;

// 创建考试请求
#[derive(Debug, Deserialize)]
pub struct CreateExamRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

// 单条成绩
#[derive(Debug, Clone, Deserialize)]
pub struct PublishResultEntry {
    pub student_id: i64,
    pub marks: f64,
    #[serde(default)]
    pub grade: Option<String>,
}

// 发布成绩请求
#[derive(Debug, Deserialize)]
pub struct PublishResultsRequest {
    pub results: Option<Vec<PublishResultEntry>>,
}
