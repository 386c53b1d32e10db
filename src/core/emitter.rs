use crate::domain::model::DataModule;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{GenError, Result};

const ROWS_PREFIX: &str = "export const ROWS = ";
const COLS_PREFIX: &str = "export const COLS = ";
const DATA_PREFIX: &str = "export const DATA: string[][] = JSON.parse('";
const DATA_SUFFIX: &str = "');";

/// Escapes `'` so the text can sit inside a single-quoted JS string literal.
///
/// Backslashes and double quotes are left alone, so a word containing them
/// ends up reinterpreted by the JS literal before `JSON.parse` sees it.
pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "\\'")
}

pub fn unescape_single_quotes(text: &str) -> String {
    text.replace("\\'", "'")
}

pub fn render(module: &DataModule, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Typescript => render_typescript_module(module),
        OutputFormat::Json => render_json(module),
    }
}

pub fn render_typescript_module(module: &DataModule) -> Result<String> {
    let data = serde_json::to_string(&module.data)?;
    let mut out = String::with_capacity(data.len() + 128);
    out.push_str(&format!("{ROWS_PREFIX}{};\n", module.rows));
    out.push_str(&format!("{COLS_PREFIX}{};\n", module.cols));
    out.push_str(DATA_PREFIX);
    out.push_str(&escape_single_quotes(&data));
    out.push_str(DATA_SUFFIX);
    out.push('\n');
    Ok(out)
}

pub fn render_json(module: &DataModule) -> Result<String> {
    Ok(serde_json::to_string(module)?)
}

/// Reads back a module produced by [`render_typescript_module`].
pub fn parse_typescript_module(text: &str) -> Result<DataModule> {
    let mut lines = text.lines();
    let rows = parse_count(lines.next(), ROWS_PREFIX, "ROWS")?;
    let cols = parse_count(lines.next(), COLS_PREFIX, "COLS")?;

    let escaped = lines
        .next()
        .and_then(|line| line.strip_prefix(DATA_PREFIX))
        .and_then(|rest| rest.strip_suffix(DATA_SUFFIX))
        .ok_or_else(|| GenError::ModuleFormat {
            message: "missing DATA declaration".to_string(),
        })?;
    let data: Vec<Vec<String>> = serde_json::from_str(&unescape_single_quotes(escaped))?;

    Ok(DataModule { rows, cols, data })
}

fn parse_count(line: Option<&str>, prefix: &str, name: &str) -> Result<usize> {
    line.and_then(|l| l.strip_prefix(prefix))
        .and_then(|rest| rest.strip_suffix(';'))
        .and_then(|n| n.trim().parse().ok())
        .ok_or_else(|| GenError::ModuleFormat {
            message: format!("missing or invalid {name} declaration"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataModule {
        DataModule {
            rows: 2,
            cols: 2,
            data: vec![
                vec!["o'clock".to_string(), "<b>it's</b>".to_string()],
                vec![
                    "<span style='color: red;'>back\\slash</span>".to_string(),
                    "<em>say \"hi\"</em>".to_string(),
                ],
            ],
        }
    }

    #[test]
    fn test_escape_round_trip() {
        for text in [
            "",
            "plain",
            "it's",
            "''",
            "\\'",
            "a\\\\'b",
            "<span style='color: red;'>x</span>",
        ] {
            assert_eq!(unescape_single_quotes(&escape_single_quotes(text)), text);
        }
        assert_eq!(escape_single_quotes("it's"), "it\\'s");
    }

    #[test]
    fn test_typescript_module_layout() {
        let text = render_typescript_module(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "export const ROWS = 2;");
        assert_eq!(lines[1], "export const COLS = 2;");
        assert!(lines[2].starts_with("export const DATA: string[][] = JSON.parse('[["));
        assert!(lines[2].ends_with("]]');"));
        // 內容中的單引號都必須被跳脫
        let body = &lines[2][DATA_PREFIX.len()..lines[2].len() - DATA_SUFFIX.len()];
        assert!(!body.replace("\\'", "").contains('\''));
    }

    #[test]
    fn test_typescript_module_parses_back() {
        let text = render_typescript_module(&sample()).unwrap();
        assert_eq!(parse_typescript_module(&text).unwrap(), sample());
    }

    #[test]
    fn test_json_output() {
        let text = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rows"], 2);
        assert_eq!(value["cols"], 2);
        assert_eq!(value["data"][0][0], "o'clock");
    }

    #[test]
    fn test_parse_rejects_malformed_module() {
        assert!(matches!(
            parse_typescript_module("export const ROWS = x;\n"),
            Err(GenError::ModuleFormat { .. })
        ));
        assert!(matches!(
            parse_typescript_module("export const ROWS = 1;\nexport const COLS = 1;\n"),
            Err(GenError::ModuleFormat { .. })
        ));
    }
}
