use std::fmt;

/// 解析後的人名：1 到 3 個名字 (given names) 加上一個姓氏 (surname)
///
/// 欄位為私有，建構後不可變更；只能透過 [`crate::core::parser::parse`] 產生。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    surname: String,
    given_names: Vec<String>,
}

impl Person {
    pub const MAX_GIVEN_NAMES: usize = 3;

    pub(crate) fn new(surname: String, given_names: Vec<String>) -> Self {
        debug_assert!(!surname.trim().is_empty());
        debug_assert!((1..=Self::MAX_GIVEN_NAMES).contains(&given_names.len()));
        Self {
            surname,
            given_names,
        }
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    /// 名字以單一空白串接，也是排序的次要鍵
    pub fn joined_given_names(&self) -> String {
        self.given_names.join(" ")
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.joined_given_names(), self.surname)
    }
}

/// 一次執行的統計結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessSummary {
    pub total_lines: usize,
    pub accepted: usize,
    pub rejected: usize,
}
