use serde::{Deserialize, Serialize};

// 班级内角色，挂在成员关系上
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClassRole {
    Teacher, // 教师
    Student, // 学生
}

impl ClassRole {
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";
}

impl<'de> Deserialize<'de> for ClassRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ClassRole>().map_err(|_| {
            serde::de::Error::custom(format!("invalid class role '{s}', expected one of: teacher, student"))
        })
    }
}

impl std::fmt::Display for ClassRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassRole::Teacher => write!(f, "{}", ClassRole::TEACHER),
            ClassRole::Student => write!(f, "{}", ClassRole::STUDENT),
        }
    }
}

impl std::str::FromStr for ClassRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ClassRole::TEACHER => Ok(ClassRole::Teacher),
            ClassRole::STUDENT => Ok(ClassRole::Student),
            _ => Err(format!("Invalid class role: {s}")),
        }
    }
}

// 班级成员关系（同时是授权依据）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTeaching {
    pub id: i64,
    pub class_id: i64,
    pub user_id: i64,
    pub role: ClassRole,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_role_parse_and_display() {
        assert_eq!("teacher".parse::<ClassRole>(), Ok(ClassRole::Teacher));
        assert_eq!("student".parse::<ClassRole>(), Ok(ClassRole::Student));
        assert!("admin".parse::<ClassRole>().is_err());
        assert_eq!(ClassRole::Teacher.to_string(), "teacher");
    }

    #[test]
    fn test_class_role_deserialize_rejects_unknown() {
        let role: ClassRole = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, ClassRole::Student);
        let err = serde_json::from_str::<ClassRole>("\"class_representative\"").unwrap_err();
        assert!(err.to_string().contains("invalid class role"));
    }
}
