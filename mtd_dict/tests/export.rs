use std::fs;
use std::path::Path;

use mtd_dict::{DictError, LanguageConfig, MtDictionary, OutputFormat};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const CONFIG: &str = r#"
[config]
L1 = "Danish"
L2 = "English"
alphabet = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
            "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
            "æ", "ø", "å"]
ignorable = ["ū"]

[[data]]
path = "words.tsv"

[[data]]
path = "extra/words.json"
[data.manifest]
definition = "gloss"
"#;

const TSV: &str = "word\tdefinition\n# sample\nråd\tadvice\nhund\tdog\nkat\n";

const JSON: &str = r#"[
  {"word": "ūįrød", "gloss": "not really a word"},
  {"word": "rød", "gloss": "red", "entryID": "r1"}
]"#;

fn write_language(dir: &Path) {
    fs::write(dir.join("config.toml"), CONFIG).unwrap();
    fs::write(dir.join("words.tsv"), TSV).unwrap();
    fs::create_dir(dir.join("extra")).unwrap();
    fs::write(dir.join("extra/words.json"), JSON).unwrap();
}

#[test]
fn builds_dictionary_from_files() {
    let dir = tempfile::tempdir().unwrap();
    write_language(dir.path());

    let dict = MtDictionary::from_path(dir.path().join("config.toml")).unwrap();
    let rows: Vec<(String, Value)> = dict
        .data()
        .iter()
        .map(|r| (r["word"].as_str().unwrap().to_string(), r["sorting_form"].clone()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("hund".to_string(), json!([7, 20, 13, 3])),
            ("rød".to_string(), json!([17, 27, 3])),
            ("råd".to_string(), json!([17, 28, 3])),
            ("ūįrød".to_string(), json!([10000, 17, 27, 3])),
        ]
    );
    // "kat" 没有释义，被跳过；manifest 把 gloss 改名为 definition
    assert_eq!(dict.len(), 4);
    assert_eq!(dict.data()[3]["definition"], json!("not really a word"));
    assert_eq!(dict.data()[1]["entryID"], json!("r1"));
    assert_eq!(dict.sorter().key_to_word(&[10000, 17, 27, 3]).unwrap(), "įrød");
}

#[test]
fn exports_json_and_js() {
    let dir = tempfile::tempdir().unwrap();
    write_language(dir.path());
    let dict = MtDictionary::from_path(dir.path().join("config.toml")).unwrap();
    let export = dict.export();

    let value: Value = serde_json::from_str(&export.render(OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(value["config"]["L1"], json!("Danish"));
    assert_eq!(value["config"]["alphabet"].as_array().map(Vec::len), Some(29));
    assert_eq!(value["data"][0]["word"], json!("hund"));

    let script = export.render(OutputFormat::Js).unwrap();
    assert!(script.starts_with("var config = {\"L1\":\"Danish\""));
    assert!(script.contains("\nvar dataDict = [{\"word\":\"hund\""));
}

#[test]
fn json_config_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    write_language(dir.path());
    let config = LanguageConfig::from_path(dir.path().join("config.toml")).unwrap();
    fs::write(dir.path().join("config.json"), serde_json::to_string(&config).unwrap()).unwrap();

    let from_json = LanguageConfig::from_path(dir.path().join("config.json")).unwrap();
    assert_eq!(from_json, config);
}

#[test]
fn reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        MtDictionary::from_path(dir.path().join("nope.toml")),
        Err(DictError::Io { .. })
    ));

    fs::write(dir.path().join("config.yaml"), "").unwrap();
    assert!(matches!(
        LanguageConfig::from_path(dir.path().join("config.yaml")),
        Err(DictError::UnsupportedFormat(_))
    ));

    fs::write(dir.path().join("config.toml"), CONFIG).unwrap();
    assert!(matches!(
        MtDictionary::from_path(dir.path().join("config.toml")),
        Err(DictError::Io { .. })
    ));
}
