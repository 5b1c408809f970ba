use crate::domain::model::Person;

/// 依姓氏、再依串接後的名字字串排序 (皆為 ordinal 比較，遞增)
///
/// 次要鍵是整串 `"Ann a"` 與 `"Anna"` 的比較，而不是逐個名字比較。
/// 排序是穩定的：鍵完全相同的記錄保持輸入順序。
pub fn sort(mut people: Vec<Person>) -> Vec<Person> {
    people.sort_by_cached_key(|p| (p.surname().to_string(), p.joined_given_names()));
    people
}
