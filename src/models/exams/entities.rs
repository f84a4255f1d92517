use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 单个学生的考试成绩
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamResultEntry {
    pub marks: f64,
    #[serde(default)]
    pub grade: Option<String>,
}

/// 一场考试的成绩表，以学生 ID（字符串）为键
///
/// 数据库中以 JSON 文本保存。发布成绩时按学生 upsert，
/// 其他学生的条目保持不变。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ExamResultMap(pub BTreeMap<String, ExamResultEntry>);

impl ExamResultMap {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// 写入或覆盖某个学生的成绩
    pub fn upsert(&mut self, student_id: i64, marks: f64, grade: Option<String>) {
        self.0
            .insert(student_id.to_string(), ExamResultEntry { marks, grade });
    }

    pub fn get(&self, student_id: i64) -> Option<&ExamResultEntry> {
        self.0.get(&student_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: i64,
    pub exam_id: i64,
    pub results: ExamResultMap,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_overwrites_only_target_student() {
        let mut map = ExamResultMap::default();
        map.upsert(1, 70.0, Some("B".to_string()));
        map.upsert(2, 55.5, None);
        map.upsert(1, 91.0, Some("A".to_string()));

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(1),
            Some(&ExamResultEntry {
                marks: 91.0,
                grade: Some("A".to_string())
            })
        );
        assert_eq!(map.get(2).map(|e| e.marks), Some(55.5));
    }

    #[test]
    fn test_json_shape_is_keyed_by_student_id() {
        let mut map = ExamResultMap::default();
        map.upsert(7, 80.0, Some("A".to_string()));
        let json = map.to_json().unwrap();
        assert_eq!(json, r#"{"7":{"marks":80.0,"grade":"A"}}"#);

        let parsed = ExamResultMap::from_json(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_empty_text_is_empty_map() {
        assert!(ExamResultMap::from_json("").unwrap().is_empty());
        assert!(ExamResultMap::from_json("{}").unwrap().is_empty());
        assert!(ExamResultMap::from_json("[1,2]").is_err());
    }
}
