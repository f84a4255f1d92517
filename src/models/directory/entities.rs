use serde::{Deserialize, Serialize};

// 教师名录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub profession: String,
    pub about: String,
    pub qualifications: String,
    pub experience: i32,
    pub branch: String,
    pub projects: String,
    pub image: Option<String>,
    pub path: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 科研人员条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Research {
    pub id: i64,
    pub name: String,
    pub profession: String,
    pub research_interests: String,
    pub research_scholars: String,
    pub projects: String,
    pub image: Option<String>,
    pub publications: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
