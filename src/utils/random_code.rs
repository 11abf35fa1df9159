use chrono::{Datelike, Utc};
use rand::Rng;

/// 生成注册号：两位年份 + 四位随机数字
///
/// 注册号列带唯一约束，冲突时由调用方重试。
pub fn generate_registration_no() -> String {
    let year = Utc::now().year() % 100;
    let suffix: u32 = rand::rng().random_range(0..10000);
    format!("{year:02}{suffix:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_no_shape() {
        let code = generate_registration_no();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_registration_no_year_prefix() {
        let code = generate_registration_no();
        let expected = format!("{:02}", Utc::now().year() % 100);
        assert_eq!(&code[..2], expected.as_str());
    }
}
