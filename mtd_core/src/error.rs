//! 错误类型。
//!
//! - `ConfigError`：字母表配置非法，在构造 `Sorter` 时立即返回
//! - `LookupError`：调用方给的字段/列不存在，或反查了不属于本会话的 key
//! - `TableError`：列式表格的形状不一致

use thiserror::Error;

/// 字母表/可忽略字符表配置错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// 空字符串无法参与最长匹配（会导致扫描原地不动）。
    #[error("empty grapheme at position {position} of the {list} list")]
    EmptyGrapheme { list: &'static str, position: usize },

    #[error("duplicate grapheme {grapheme:?} in alphabet (positions {first} and {second})")]
    DuplicateGrapheme {
        grapheme: String,
        first: usize,
        second: usize,
    },

    /// 同一个 grapheme 既在字母表中又在可忽略表中，优先级含糊。
    #[error("grapheme {0:?} is listed both in the alphabet and as ignorable")]
    AmbiguousGrapheme(String),

    /// 字母表的 rank 必须低于 OOV 编码起点，否则两者会冲突。
    #[error("alphabet has {len} graphemes, must stay below the OOV base {base}")]
    AlphabetTooLarge { len: usize, base: u32 },
}

/// 查找错误：字段缺失或 key 无法反查。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// 第 `row` 条记录没有名为 `field` 的文本字段。
    #[error("record {row} has no text field {field:?}")]
    MissingField { row: usize, field: String },

    /// 表格整列缺失（对整张表是致命错误）。
    #[error("table has no text column {0:?}")]
    MissingColumn(String),

    /// 排序键字段与文本字段同名，写入排序键会覆盖原文。
    #[error("sort keys would overwrite the text field {0:?}")]
    KeyFieldClash(String),

    /// 低于 OOV 起点、但超出字母表范围的值。
    #[error("sort key value {0} is not a rank of this alphabet")]
    UnknownRank(u32),

    /// 本会话从未分配过的 OOV 编码（key 来自别的 `Sorter`）。
    #[error("sort key value {0} was never issued as an OOV code by this sorter")]
    UnknownCode(u32),
}

/// 表格结构错误（列长度不一致、列名重复）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("column {name:?} has {got} rows, table has {expected}")]
    RowCountMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column {0:?}")]
    DuplicateColumn(String),
}

/// 合并各类错误，便于上层只处理一种类型。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Table(#[from] TableError),
}

pub type Result<T> = std::result::Result<T, Error>;
