use crate::domain::model::Person;
use crate::utils::error::{NameSorterError, RecordDefect, Result};

const MIN_PARTS: usize = 2;
const MAX_PARTS: usize = Person::MAX_GIVEN_NAMES + 1;

/// 將一行原始文字解析成 [`Person`]
///
/// 以任意空白切分並捨棄空片段；最後一個片段為姓氏，其餘依原順序為名字。
/// 片段內容原樣保留，不檢查標點或大小寫。
pub fn parse(raw: &str) -> Result<Person> {
    if raw.trim().is_empty() {
        return Err(NameSorterError::invalid_record(raw, RecordDefect::Blank));
    }

    let mut parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if parts.len() < MIN_PARTS || parts.len() > MAX_PARTS {
        return Err(NameSorterError::invalid_record(
            raw,
            RecordDefect::TokenCount(parts.len()),
        ));
    }

    // 長度已檢查過，pop 必定有值
    let surname = parts.pop().unwrap_or_default();
    Ok(Person::new(surname, parts))
}
