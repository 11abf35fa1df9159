use serde::{Deserialize, Serialize};

// 缴费方式
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Full,        // 一次性缴清
    Installment, // 分期
}

impl<'de> Deserialize<'de> for PaymentMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "full" => Ok(PaymentMode::Full),
            "installment" => Ok(PaymentMode::Installment),
            _ => Err(serde::de::Error::custom(format!(
                "无效的缴费方式: '{s}'. 支持: full, installment"
            ))),
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Full => write!(f, "full"),
            PaymentMode::Installment => write!(f, "installment"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(PaymentMode::Full),
            "installment" => Ok(PaymentMode::Installment),
            _ => Err(format!("Invalid payment mode: {s}")),
        }
    }
}

// 分期状态，按已收金额重算得出
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    Partial,
    Paid,
}

impl<'de> Deserialize<'de> for InstallmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "partial" => Ok(InstallmentStatus::Partial),
            "paid" => Ok(InstallmentStatus::Paid),
            _ => Err(serde::de::Error::custom(format!(
                "无效的分期状态: '{s}'. 支持: partial, paid"
            ))),
        }
    }
}

impl std::fmt::Display for InstallmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstallmentStatus::Partial => write!(f, "partial"),
            InstallmentStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for InstallmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partial" => Ok(InstallmentStatus::Partial),
            "paid" => Ok(InstallmentStatus::Paid),
            _ => Err(format!("Invalid installment status: {s}")),
        }
    }
}

// 收费分配实体
//
// total_fee/discount/final_amount 为分配时的快照，
// 套餐金额后续变更不会影响已有分配。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeAssignment {
    pub id: i64,
    pub student_id: i64,
    pub package_id: i64,
    pub total_fee: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub payment_mode: PaymentMode,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}

// 分期实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installment {
    pub id: i64,
    pub assignment_id: i64,
    pub title: String,
    pub amount: f64,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub status: InstallmentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
