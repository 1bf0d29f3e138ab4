use serde::{Deserialize, Serialize};

/// `Sorter` 的构造参数；语言定义文件中的字母表部分直接反序列化到这里。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterConfig {
    /// 有序字母表（必填）
    pub alphabet: Vec<String>,
    /// 可忽略字符（默认空）
    #[serde(default)]
    pub ignorable: Vec<String>,
}

impl SorterConfig {
    pub fn new<A, I>(alphabet: A, ignorable: I) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            ignorable: ignorable.into_iter().map(Into::into).collect(),
        }
    }
}
