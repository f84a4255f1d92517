use serde::Deserialize;

pub const DEFAULT_BRANCH: &str = "General";
pub const DEFAULT_PATH: &str = "/home";

fn default_branch() -> String {
    DEFAULT_BRANCH.to_string()
}

fn default_path() -> String {
    DEFAULT_PATH.to_string()
}

// 创建 / 整体替换教师条目
#[derive(Debug, Clone, Deserialize)]
pub struct FacultyRequest {
    pub name: String,
    pub profession: String,
    #[serde(default)]
    pub about: String,
    pub qualifications: String,
    pub experience: i32,
    #[serde(default = "default_branch")]
    pub branch: String,
    #[serde(default)]
    pub projects: String,
    pub image: Option<String>,
    #[serde(default = "default_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchRequest {
    pub name: String,
    pub profession: String,
    pub research_interests: String,
    pub research_scholars: String,
    pub projects: String,
    pub image: Option<String>,
    #[serde(default)]
    pub publications: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_request_defaults() {
        let req: FacultyRequest = serde_json::from_str(
            r#"{"name":"A","profession":"Prof","qualifications":"PhD","experience":3}"#,
        )
        .unwrap();
        assert_eq!(req.branch, "General");
        assert_eq!(req.path, "/home");
        assert!(req.image.is_none());
        assert!(req.about.is_empty());
    }
}
