//! 费用汇总与分期状态
//!
//! due = total − discount − paid，允许为负（多缴记为负欠费，不截断）。

use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::InstallmentStatus;

// 单个学生的费用汇总
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeSummary {
    pub total_fee: f64,
    pub discount: f64,
    pub paid: f64,
    pub due: f64,
}

/// 汇总应收、折扣、已缴与欠费
pub fn fee_summary(total_fee: f64, discount: f64, paid: f64) -> FeeSummary {
    FeeSummary {
        total_fee,
        discount,
        paid,
        due: total_fee - discount - paid,
    }
}

/// 依据已缴总额判定分期状态
///
/// 缴足（含多缴）为 Paid，否则为 Partial。每次增删缴费后
/// 都要用该分期的全量缴费记录重新判定。
pub fn installment_status(amount: f64, paid: f64) -> InstallmentStatus {
    if paid >= amount {
        InstallmentStatus::Paid
    } else {
        InstallmentStatus::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_summary_basic() {
        let summary = fee_summary(10000.0, 1000.0, 4000.0);
        assert_eq!(summary.due, 5000.0);
    }

    #[test]
    fn test_fee_summary_overpayment_goes_negative() {
        let summary = fee_summary(10000.0, 1000.0, 10000.0);
        assert_eq!(summary.due, -1000.0);
    }

    #[test]
    fn test_installment_status_exact_payment_is_paid() {
        assert_eq!(installment_status(5000.0, 5000.0), InstallmentStatus::Paid);
    }

    #[test]
    fn test_installment_status_partial() {
        assert_eq!(
            installment_status(5000.0, 3000.0),
            InstallmentStatus::Partial
        );
    }

    #[test]
    fn test_installment_status_overpaid_is_paid() {
        assert_eq!(installment_status(5000.0, 6000.0), InstallmentStatus::Paid);
    }

    #[test]
    fn test_installment_status_zero_paid() {
        assert_eq!(installment_status(5000.0, 0.0), InstallmentStatus::Partial);
    }
}
