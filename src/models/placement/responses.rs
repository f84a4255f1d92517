use super::entities::PlacementCompany;
use crate::models::users::entities::UserSummary;
use serde::Serialize;

// 学生视角的公司列表项
#[derive(Debug, Serialize)]
pub struct StudentCompanyItem {
    #[serde(flatten)]
    pub company: PlacementCompany,
    pub is_eligible: bool,
    pub applied: bool,
}

// 投递记录（带用户与公司信息）
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub user: UserSummary,
    pub company: PlacementCompany,
    pub other_details: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct CompanyApplicationsResponse {
    pub company: PlacementCompany,
    pub items: Vec<ApplicationResponse>,
}
