//! `mtd_core`：自定义字母表排序（collation）的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **字母表驱动**：排序完全由用户给定的字母表（含双字母 digraph）和可忽略字符表决定
//! - **尽力而为**：字母表之外的字符（OOV）不报错，分配稳定的编码并排在所有已知字符之后
//! - **分层清晰**：alphabet -> tokenizer -> oov -> sort_key -> sorter -> 记录集合（`Collection`）
pub mod alphabet;
pub mod collection;
pub mod config;
pub mod error;
pub mod oov;
pub mod sort_key;
pub mod sorter;
pub mod table;
pub mod tokenizer;

pub use alphabet::AlphabetIndex;
pub use collection::{Collection, Record};
pub use config::SorterConfig;
pub use error::{ConfigError, Error, LookupError, Result, TableError};
pub use oov::{OOV_BASE, OovRegistry};
pub use sort_key::{KeyBuilder, SortKey, key_to_word};
pub use sorter::{DEFAULT_KEY_FIELD, Sorter};
pub use table::{Column, Table};
pub use tokenizer::{Token, Tokens};
