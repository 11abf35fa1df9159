//! 查询意图识别
//!
//! 纯关键词解析，没有任何模型调用：先尝试学号模式，
//! 再去掉常见填充词把剩余部分当作姓名。

use once_cell::sync::Lazy;
use regex::Regex;

static ROLL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"roll\s*(?:no\.?|number)?\s*(\d+)").expect("Invalid roll number regex")
});

static FILLER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:search|find|details|of|student|about)\b").expect("Invalid filler regex")
});

// 识别出的查询意图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    // 按学号查
    RollLookup(String),
    // 按姓名模糊查
    NameSearch(String),
    // 去掉填充词后什么都不剩
    Empty,
}

/// 解析用户输入
pub fn parse_intent(query: &str) -> ChatIntent {
    let normalized = query.trim().to_lowercase();

    if let Some(captures) = ROLL_RE.captures(&normalized)
        && let Some(roll) = captures.get(1)
    {
        return ChatIntent::RollLookup(roll.as_str().to_string());
    }

    let name = FILLER_RE.replace_all(&normalized, " ");
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    if name.is_empty() {
        ChatIntent::Empty
    } else {
        ChatIntent::NameSearch(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_variants() {
        assert_eq!(
            parse_intent("roll no 12"),
            ChatIntent::RollLookup("12".to_string())
        );
        assert_eq!(
            parse_intent("Roll No. 7"),
            ChatIntent::RollLookup("7".to_string())
        );
        assert_eq!(
            parse_intent("student roll number 305"),
            ChatIntent::RollLookup("305".to_string())
        );
        assert_eq!(
            parse_intent("roll12"),
            ChatIntent::RollLookup("12".to_string())
        );
    }

    #[test]
    fn test_name_search_strips_fillers() {
        assert_eq!(
            parse_intent("find details of ram"),
            ChatIntent::NameSearch("ram".to_string())
        );
        assert_eq!(
            parse_intent("search student about Sita Sharma"),
            ChatIntent::NameSearch("sita sharma".to_string())
        );
    }

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(
            parse_intent("Hari Prasad"),
            ChatIntent::NameSearch("hari prasad".to_string())
        );
    }

    #[test]
    fn test_filler_only_is_empty() {
        assert_eq!(parse_intent("find student details"), ChatIntent::Empty);
        assert_eq!(parse_intent("   "), ChatIntent::Empty);
    }

    #[test]
    fn test_filler_matches_whole_words_only() {
        // "often" 含 "of"，不能误剥
        assert_eq!(
            parse_intent("often"),
            ChatIntent::NameSearch("often".to_string())
        );
    }
}
