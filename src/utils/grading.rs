//! 成绩评定
//!
//! NEB 风格的固定百分比档位：按 obtained/full_marks 的百分比取档，
//! 档位下界为闭区间。满分为 0 时直接评定 NG（定义行为，不是错误）。

use serde::Serialize;

// 等第
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "NG")]
    Ng,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::Ng => "NG",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 评定结果：等第 + 绩点（4.0 制）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    pub grade: Grade,
    pub gpa: f64,
}

/// 按固定档位将得分评定为等第与绩点
pub fn calculate_grade(obtained: f64, full_marks: f64) -> GradeResult {
    if full_marks == 0.0 {
        return GradeResult {
            grade: Grade::Ng,
            gpa: 0.0,
        };
    }

    let percentage = obtained / full_marks * 100.0;

    if percentage >= 90.0 {
        GradeResult {
            grade: Grade::APlus,
            gpa: 4.0,
        }
    } else if percentage >= 80.0 {
        GradeResult {
            grade: Grade::A,
            gpa: 3.6,
        }
    } else if percentage >= 70.0 {
        GradeResult {
            grade: Grade::BPlus,
            gpa: 3.2,
        }
    } else if percentage >= 60.0 {
        GradeResult {
            grade: Grade::B,
            gpa: 2.8,
        }
    } else if percentage >= 50.0 {
        GradeResult {
            grade: Grade::CPlus,
            gpa: 2.4,
        }
    } else if percentage >= 40.0 {
        GradeResult {
            grade: Grade::C,
            gpa: 2.0,
        }
    } else if percentage >= 35.0 {
        GradeResult {
            grade: Grade::D,
            gpa: 1.6,
        }
    } else {
        GradeResult {
            grade: Grade::Ng,
            gpa: 0.0,
        }
    }
}

/// 学分加权平均绩点，格式化为两位小数的文本
///
/// 输入为 (学分, 绩点) 序列；空序列返回 "0.00"。
pub fn calculate_overall_gpa(subjects: &[(f64, f64)]) -> String {
    if subjects.is_empty() {
        return "0.00".to_string();
    }

    let total_credit_points: f64 = subjects.iter().map(|(ch, gp)| ch * gp).sum();
    let total_credit_hours: f64 = subjects.iter().map(|(ch, _)| ch).sum();

    format!("{:.2}", total_credit_points / total_credit_hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_full_marks_is_ng() {
        let result = calculate_grade(40.0, 0.0);
        assert_eq!(result.grade, Grade::Ng);
        assert_eq!(result.gpa, 0.0);
    }

    #[test]
    fn test_boundary_inclusivity() {
        // 89.9% 是 A，90% 起才是 A+
        assert_eq!(calculate_grade(89.9, 100.0).grade, Grade::A);
        assert_eq!(calculate_grade(90.0, 100.0).grade, Grade::APlus);
        assert_eq!(calculate_grade(35.0, 100.0).grade, Grade::D);
        assert_eq!(calculate_grade(34.9, 100.0).grade, Grade::Ng);
    }

    #[test]
    fn test_all_bands() {
        let cases = [
            (95.0, Grade::APlus, 4.0),
            (85.0, Grade::A, 3.6),
            (75.0, Grade::BPlus, 3.2),
            (65.0, Grade::B, 2.8),
            (55.0, Grade::CPlus, 2.4),
            (45.0, Grade::C, 2.0),
            (37.0, Grade::D, 1.6),
            (10.0, Grade::Ng, 0.0),
        ];
        for (obtained, grade, gpa) in cases {
            let result = calculate_grade(obtained, 100.0);
            assert_eq!(result.grade, grade, "obtained={obtained}");
            assert_eq!(result.gpa, gpa, "obtained={obtained}");
        }
    }

    #[test]
    fn test_scales_with_full_marks() {
        // 45/50 = 90% → A+
        assert_eq!(calculate_grade(45.0, 50.0).grade, Grade::APlus);
    }

    #[test]
    fn test_grade_monotonic_in_percentage() {
        let mut last_gpa = 0.0;
        for p in 0..=100 {
            let gpa = calculate_grade(p as f64, 100.0).gpa;
            assert!(gpa >= last_gpa, "gpa dropped at {p}%");
            last_gpa = gpa;
        }
    }

    #[test]
    fn test_overall_gpa_empty() {
        assert_eq!(calculate_overall_gpa(&[]), "0.00");
    }

    #[test]
    fn test_overall_gpa_weighted() {
        assert_eq!(calculate_overall_gpa(&[(4.0, 3.6), (4.0, 2.0)]), "2.80");
    }

    #[test]
    fn test_overall_gpa_uneven_credits() {
        // (8*4.0 + 4*2.0) / 12 = 3.33…
        assert_eq!(calculate_overall_gpa(&[(8.0, 4.0), (4.0, 2.0)]), "3.33");
    }
}
