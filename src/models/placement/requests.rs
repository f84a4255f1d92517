use serde::Deserialize;

// 创建就业档案请求
#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub cgpa: Option<f64>,
    pub percentage_10th: Option<f64>,
    pub percentage_12th: Option<f64>,
}

// 创建公司请求（仅就业协调员）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub min_cgpa: f64,
    #[serde(default)]
    pub min_10th: f64,
    #[serde(default)]
    pub min_12th: f64,
    #[serde(default)]
    pub max_backlogs: i32,
    pub package: f64,
}

// 投递请求
#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub company_id: Option<i64>,
}

// 设置就业协调员标记（管理员）
#[derive(Debug, Deserialize)]
pub struct SetCoordinatorRequest {
    pub is_placement_coordinator: bool,
}
