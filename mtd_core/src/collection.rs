//! `collection`：排序器与记录集合之间的字段访问接口。
//!
//! `Sorter` 不关心数据是“按行的记录列表”还是“按列的表格”，只通过 `Collection`：
//! - 读取第 `row` 行的文本字段
//! - 把算好的排序键整体写回某个字段/列
//! - 按给定排列重排所有行

use serde_json::Value;

use crate::error::LookupError;
use crate::sort_key::SortKey;

/// 一条记录：字段名 -> 值（保持插入顺序）。
pub type Record = serde_json::Map<String, Value>;

/// 可被 `Sorter` 标注/排序的集合。
pub trait Collection {
    /// 行数。
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 在处理任何一行之前检查字段；整列缺失之类的致命错误在这里返回。
    fn check_field(&self, _field: &str) -> Result<(), LookupError> {
        Ok(())
    }

    /// 第 `row` 行 `field` 字段的文本。
    fn text_at(&self, row: usize, field: &str) -> Result<&str, LookupError>;

    /// 写入排序键：`keys[i]` 对应第 `i` 行；已存在的同名字段被覆盖。
    fn set_keys(&mut self, field: &str, keys: Vec<SortKey>);

    /// 重排：新第 `i` 行 = 旧第 `order[i]` 行。`order` 必须是 `0..len` 的一个排列。
    fn reorder(&mut self, order: &[usize]);
}

impl Collection for Vec<Record> {
    fn len(&self) -> usize {
        <[Record]>::len(self)
    }

    fn text_at(&self, row: usize, field: &str) -> Result<&str, LookupError> {
        self.get(row)
            .and_then(|record| record.get(field))
            .and_then(Value::as_str)
            .ok_or_else(|| LookupError::MissingField {
                row,
                field: field.to_owned(),
            })
    }

    fn set_keys(&mut self, field: &str, keys: Vec<SortKey>) {
        for (record, key) in self.iter_mut().zip(keys) {
            let value = Value::Array(key.iter().map(|&v| Value::from(v)).collect());
            record.insert(field.to_owned(), value);
        }
    }

    fn reorder(&mut self, order: &[usize]) {
        let items = std::mem::take(self);
        *self = permute(items, order);
    }
}

/// 按排列重排一个 `Vec`（元素只移动、不克隆）。
pub(crate) fn permute<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reads_text_fields() {
        let recs = records(json!([{ "word": "hund" }, { "word": 3 }, { "other": "x" }]));
        assert_eq!(recs.text_at(0, "word"), Ok("hund"));
        assert_eq!(
            recs.text_at(1, "word"),
            Err(LookupError::MissingField { row: 1, field: "word".into() })
        );
        assert_eq!(
            recs.text_at(2, "word"),
            Err(LookupError::MissingField { row: 2, field: "word".into() })
        );
    }

    #[test]
    fn set_keys_keeps_other_fields() {
        let mut recs = records(json!([{ "word": "ab", "definition": "x" }]));
        recs.set_keys("sorting_form", vec![SortKey::from(vec![0, 1])]);
        assert_eq!(
            Value::Array(recs.into_iter().map(Value::Object).collect()),
            json!([{ "word": "ab", "definition": "x", "sorting_form": [0, 1] }])
        );
    }

    #[test]
    fn permute_moves_items() {
        assert_eq!(permute(vec!["a", "b", "c"], &[2, 0, 1]), vec!["c", "a", "b"]);
        let mut recs = records(json!([{ "n": "0" }, { "n": "1" }]));
        recs.reorder(&[1, 0]);
        assert_eq!(recs.text_at(0, "n"), Ok("1"));
    }
}
