mod cli;
mod error;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use mtd_core::{Collection, Column, Sorter, Table};
use mtd_dict::{LanguageConfig, MtDictionary, OutputFormat};
use tracing::info;

use cli::{Cli, Commands};
use error::{CliError, CliResult, exit_with_error};

fn init_tracing(cli: &Cli) {
    // --quiet 关闭日志；--verbose 优先 RUST_LOG，否则 info；默认只输出 warn
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Export {
            language_config_path,
            output_format,
            output,
        } => export(&language_config_path, output_format.into(), output).map(drop),
        Commands::Sort {
            language_config_path,
            words,
        } => sort(&language_config_path, words),
    }
}

/// 未给 `--output` 时写到当前目录下的 `dictionary_data.<fmt>`。
fn output_path(format: OutputFormat, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(format.default_file_name()))
}

fn export(config_path: &Path, format: OutputFormat, output: Option<PathBuf>) -> CliResult<PathBuf> {
    let dictionary = MtDictionary::from_path(config_path)?;
    let rendered = dictionary.export().render(format)?;
    let output = output_path(format, output);
    fs::write(&output, rendered).map_err(|source| CliError::Write {
        path: output.clone(),
        source,
    })?;
    info!(
        entries = dictionary.len(),
        format = %format,
        path = %output.display(),
        "exported dictionary"
    );
    Ok(output)
}

fn sort(config_path: &Path, words: Vec<String>) -> CliResult<()> {
    let words = if words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        words
    };

    let mut out = io::stdout().lock();
    sort_into(config_path, words, &mut out)?;
    out.flush()?;
    Ok(())
}

/// 每行输出 `word<TAB>key<TAB>key_to_word(key)`，按排序键升序。
fn sort_into(config_path: &Path, words: Vec<String>, out: &mut impl Write) -> CliResult<()> {
    let config = LanguageConfig::load(config_path)?;
    let mut sorter = Sorter::from_config(config.sorter_config())?;

    let table = sorter.sorted_by(Table::from_texts("word", words), "word")?;
    let keys = table
        .column(sorter.key_field())
        .and_then(Column::as_sort_keys)
        .unwrap_or_default();

    info!(words = table.num_rows(), oov = sorter.oov().len(), "sorted words");
    for (row, key) in keys.iter().enumerate() {
        let word = table.text_at(row, "word")?;
        let normalized = sorter.key_to_word(key)?;
        writeln!(out, "{word}\t{key}\t{normalized}")?;
    }
    Ok(())
}

/// 每行一个单词；忽略空行。
fn read_words(input: impl BufRead) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}
