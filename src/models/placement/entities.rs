use serde::{Deserialize, Serialize};

// 学生就业档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementProfile {
    pub id: i64,
    pub user_id: i64,
    pub cgpa: f64,
    pub percentage_10th: f64,
    pub percentage_12th: f64,
    pub is_placement_coordinator: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PlacementProfile {
    /// 档案的可序列化快照，投递时写入 other_details
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            user: self.user_id,
            cgpa: self.cgpa,
            percentage_10th: self.percentage_10th,
            percentage_12th: self.percentage_12th,
            is_placement_coordinator: self.is_placement_coordinator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSnapshot {
    pub user: i64,
    pub cgpa: f64,
    pub percentage_10th: f64,
    pub percentage_12th: f64,
    pub is_placement_coordinator: bool,
}

// 招聘公司及其最低门槛
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementCompany {
    pub id: i64,
    pub name: String,
    pub job_description: String,
    pub min_cgpa: f64,
    pub min_10th: f64,
    pub min_12th: f64,
    // 仅作为数据保存，资格判断不使用
    pub max_backlogs: i32,
    pub package: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementApplication {
    pub id: i64,
    pub user_id: i64,
    pub company_id: i64,
    pub other_details: serde_json::Value,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}
