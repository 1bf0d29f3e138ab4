//! `table`：按列存储的表格，供“整列文本 -> 整列排序键”的用法。
//!
//! - 每列一个 `Vec`，所有列行数相同
//! - 列按名字访问，保持插入顺序
//! - 与 `Vec<Record>` 互转，便于与记录列表共用同一套数据

use serde_json::Value;

use crate::collection::{Collection, Record, permute};
use crate::error::{LookupError, TableError};
use crate::sort_key::SortKey;

/// 列存储。
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// 文本列；`None` 表示该行没有值
    Text(Vec<Option<String>>),
    /// 排序键列（由 `Sorter` 写入）
    SortKey(Vec<SortKey>),
    /// 其他任意 JSON 值；`None` 表示该行没有这个字段，`Some(Null)` 是显式的 `null`
    Json(Vec<Option<Value>>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(v) => v.len(),
            Self::SortKey(v) => v.len(),
            Self::Json(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_text(&self) -> Option<&[Option<String>]> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_sort_keys(&self) -> Option<&[SortKey]> {
        match self {
            Self::SortKey(v) => Some(v),
            _ => None,
        }
    }

    /// 第 `row` 行的 JSON 表示；空文本单元返回 `None`。
    fn value_at(&self, row: usize) -> Option<Value> {
        match self {
            Self::Text(v) => v.get(row)?.as_ref().map(|s| Value::String(s.clone())),
            Self::SortKey(v) => v.get(row).map(|k| Value::Array(k.iter().map(|&x| Value::from(x)).collect())),
            Self::Json(v) => v.get(row)?.clone(),
        }
    }

    fn permute(&mut self, order: &[usize]) {
        match self {
            Self::Text(v) => *v = permute(std::mem::take(v), order),
            Self::SortKey(v) => *v = permute(std::mem::take(v), order),
            Self::Json(v) => *v = permute(std::mem::take(v), order),
        }
    }
}

/// 列式表格。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一列；第一列决定行数，之后每列行数必须一致。
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<(), TableError> {
        let name = name.into();
        if self.index_of(&name).is_some() {
            return Err(TableError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(TableError::RowCountMismatch {
                name,
                expected: self.rows,
                got: column.len(),
            });
        }
        self.rows = column.len();
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// builder 风格的 `push_column`。
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self, TableError> {
        self.push_column(name, column)?;
        Ok(self)
    }

    /// 单列文本表。
    pub fn from_texts<I, S>(name: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Option<String>> = texts.into_iter().map(|s| Some(s.into())).collect();
        Self {
            names: vec![name.into()],
            rows: cells.len(),
            columns: vec![Column::Text(cells)],
        }
    }

    /// 由记录列表建表：列按字段首次出现的顺序排列。
    ///
    /// 一列中所有出现的值都是字符串时建为 `Column::Text`，否则为 `Column::Json`
    /// （显式的 `null` 也归入 `Json`，转回记录时原样保留）。
    pub fn from_records(records: &[Record]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
        }

        let columns = names
            .iter()
            .map(|name| {
                let all_text = records
                    .iter()
                    .filter_map(|r| r.get(name))
                    .all(Value::is_string);
                if all_text {
                    Column::Text(
                        records
                            .iter()
                            .map(|r| r.get(name).and_then(Value::as_str).map(str::to_owned))
                            .collect(),
                    )
                } else {
                    Column::Json(
                        records
                            .iter()
                            .map(|r| r.get(name).cloned())
                            .collect(),
                    )
                }
            })
            .collect();

        Self {
            names,
            columns,
            rows: records.len(),
        }
    }

    /// 转回记录列表；空单元不写入记录。
    pub fn to_records(&self) -> Vec<Record> {
        (0..self.rows)
            .map(|row| {
                self.names
                    .iter()
                    .zip(&self.columns)
                    .filter_map(|(name, col)| col.value_at(row).map(|v| (name.clone(), v)))
                    .collect()
            })
            .collect()
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index_of(name).map(|i| &self.columns[i])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl Collection for Table {
    fn len(&self) -> usize {
        self.rows
    }

    fn check_field(&self, field: &str) -> Result<(), LookupError> {
        match self.column(field) {
            Some(Column::Text(_)) => Ok(()),
            _ => Err(LookupError::MissingColumn(field.to_owned())),
        }
    }

    fn text_at(&self, row: usize, field: &str) -> Result<&str, LookupError> {
        let cells = self
            .column(field)
            .and_then(Column::as_text)
            .ok_or_else(|| LookupError::MissingColumn(field.to_owned()))?;
        cells
            .get(row)
            .and_then(Option::as_deref)
            .ok_or_else(|| LookupError::MissingField {
                row,
                field: field.to_owned(),
            })
    }

    fn set_keys(&mut self, field: &str, keys: Vec<SortKey>) {
        if self.columns.is_empty() {
            self.rows = keys.len();
        }
        match self.index_of(field) {
            Some(i) => self.columns[i] = Column::SortKey(keys),
            None => {
                self.names.push(field.to_owned());
                self.columns.push(Column::SortKey(keys));
            }
        }
    }

    fn reorder(&mut self, order: &[usize]) {
        for column in &mut self.columns {
            column.permute(order);
        }
    }
}
