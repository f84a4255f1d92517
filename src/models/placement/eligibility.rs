//! 投递资格判断
//!
//! 只比较 CGPA、10 年级与 12 年级成绩三项门槛；公司的 `max_backlogs`
//! 保存但不参与判断（档案中没有挂科数）。

use super::entities::{PlacementCompany, PlacementProfile};

/// 档案是否满足公司的全部最低要求（边界值视为满足）
pub fn is_eligible(profile: &PlacementProfile, company: &PlacementCompany) -> bool {
    profile.cgpa >= company.min_cgpa
        && profile.percentage_10th >= company.min_10th
        && profile.percentage_12th >= company.min_12th
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(cgpa: f64, p10: f64, p12: f64) -> PlacementProfile {
        PlacementProfile {
            id: 1,
            user_id: 1,
            cgpa,
            percentage_10th: p10,
            percentage_12th: p12,
            is_placement_coordinator: false,
            created_at: chrono::Utc::now(),
        }
    }

    fn company(min_cgpa: f64, min_10th: f64, min_12th: f64, max_backlogs: i32) -> PlacementCompany {
        PlacementCompany {
            id: 1,
            name: "Acme".to_string(),
            job_description: String::new(),
            min_cgpa,
            min_10th,
            min_12th,
            max_backlogs,
            package: 12.0,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_meets_all_thresholds() {
        assert!(is_eligible(&profile(8.5, 90.0, 88.0), &company(8.0, 85.0, 85.0, 0)));
    }

    #[test]
    fn test_boundary_values_are_eligible() {
        assert!(is_eligible(&profile(8.0, 85.0, 85.0), &company(8.0, 85.0, 85.0, 0)));
    }

    #[test]
    fn test_any_threshold_below_fails() {
        let c = company(8.0, 85.0, 85.0, 0);
        assert!(!is_eligible(&profile(7.0, 90.0, 90.0), &c));
        assert!(!is_eligible(&profile(9.0, 84.99, 90.0), &c));
        assert!(!is_eligible(&profile(9.0, 90.0, 84.0), &c));
    }

    #[test]
    fn test_max_backlogs_is_not_enforced() {
        let p = profile(8.5, 90.0, 88.0);
        assert_eq!(
            is_eligible(&p, &company(8.0, 85.0, 85.0, 0)),
            is_eligible(&p, &company(8.0, 85.0, 85.0, 10))
        );
        assert!(is_eligible(&p, &company(8.0, 85.0, 85.0, -1)));
    }
}
