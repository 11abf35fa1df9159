/// 非空名称校验（姓名、套餐名、考试名等）
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    if name.len() > 128 {
        return Err("Name must not exceed 128 characters");
    }
    Ok(())
}

/// 金额校验：必须为有限非负数
pub fn validate_amount(amount: f64) -> Result<(), &'static str> {
    if !amount.is_finite() {
        return Err("Amount must be a finite number");
    }
    if amount < 0.0 {
        return Err("Amount must not be negative");
    }
    Ok(())
}

/// 折扣校验：非负且不超过应收总额
pub fn validate_discount(discount: f64, total_fee: f64) -> Result<(), &'static str> {
    validate_amount(discount)?;
    if discount > total_fee {
        return Err("Discount must not exceed the total fee");
    }
    Ok(())
}

/// 满分/及格分校验：满分非负，及格分不高于满分
pub fn validate_marks_scheme(full_marks: f64, pass_marks: f64) -> Result<(), &'static str> {
    validate_amount(full_marks)?;
    validate_amount(pass_marks)?;
    if pass_marks > full_marks {
        return Err("Pass marks must not exceed full marks");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Ram Sharma").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(2500.5).is_ok());
        assert!(validate_amount(-1.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(500.0, 10000.0).is_ok());
        assert!(validate_discount(10000.0, 10000.0).is_ok());
        assert!(validate_discount(10001.0, 10000.0).is_err());
        assert!(validate_discount(-1.0, 10000.0).is_err());
    }

    #[test]
    fn test_validate_marks_scheme() {
        assert!(validate_marks_scheme(100.0, 40.0).is_ok());
        assert!(validate_marks_scheme(100.0, 100.0).is_ok());
        assert!(validate_marks_scheme(40.0, 100.0).is_err());
        assert!(validate_marks_scheme(-5.0, 0.0).is_err());
    }
}
