use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mtd", about = "按自定义字母表排序并导出词典数据", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出日志（也可用 RUST_LOG 细调）
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// 不输出任何日志
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 构建词典并导出给 web 前端
    Export {
        /// 语言定义文件（.toml / .json）
        language_config_path: PathBuf,

        /// 输出格式
        #[arg(long, value_enum, default_value_t = ExportFormat::Js)]
        output_format: ExportFormat,

        /// 输出文件；默认 dictionary_data.<format>
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// 用语言定义文件中的字母表排序单词，输出 `单词<TAB>排序键<TAB>还原形式`
    Sort {
        /// 语言定义文件（只读取字母表部分）
        language_config_path: PathBuf,

        /// 待排序单词；省略时从标准输入逐行读取
        words: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON 文档
    Json,
    /// 定义 `config` / `dataDict` 全局变量的脚本
    Js,
}

impl From<ExportFormat> for mtd_dict::OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Js => Self::Js,
        }
    }
}
