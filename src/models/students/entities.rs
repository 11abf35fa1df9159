use serde::{Deserialize, Serialize};

// 学生状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum StudentStatus {
    Active,   // 在读
    Inactive, // 停学
    Left,     // 离校
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(StudentStatus::Active),
            "inactive" => Ok(StudentStatus::Inactive),
            "left" => Ok(StudentStatus::Left),
            _ => Err(serde::de::Error::custom(format!(
                "无效的学生状态: '{s}'. 支持的状态: active, inactive, left"
            ))),
        }
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentStatus::Active => write!(f, "active"),
            StudentStatus::Inactive => write!(f, "inactive"),
            StudentStatus::Left => write!(f, "left"),
        }
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StudentStatus::Active),
            "inactive" => Ok(StudentStatus::Inactive),
            "left" => Ok(StudentStatus::Left),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub grade: String,
    pub stream: String,
    pub section: Option<String>,
    pub roll_no: String,
    pub registration_no: String,
    pub academic_year: String,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::DateTime<chrono::Utc>>,
    pub admission_date: chrono::DateTime<chrono::Utc>,
    pub status: StudentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
