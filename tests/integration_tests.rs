use anyhow::Result;
use httpmock::prelude::*;
use std::collections::VecDeque;
use table_datagen::core::emitter::parse_typescript_module;
use table_datagen::core::{Chooser, OutputFormat, Wrapper};
use table_datagen::{GenerationEngine, LocalStorage, TablePipeline, TomlConfig};
use tempfile::TempDir;

/// Replays a fixed list of indices in call order.
struct ScriptedChooser {
    picks: VecDeque<usize>,
}

impl ScriptedChooser {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.iter().copied().collect(),
        }
    }
}

impl Chooser for ScriptedChooser {
    fn pick(&mut self, n: usize) -> usize {
        let next = self.picks.pop_front().expect("scripted picks exhausted");
        assert!(next < n, "scripted pick {} out of range 0..{}", next, n);
        next
    }
}

fn config_for(server_url: &str, output_path: &str, table: &str) -> TomlConfig {
    let toml_content = format!(
        r#"
[source]
url = "{server_url}"

[table]
{table}

[output]
path = "{output_path}"
"#
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

#[tokio::test]
async fn test_end_to_end_with_scripted_choices() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("data.ts");
    let output_path = output_path.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start_async().await;
    let words_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/words");
            then.status(200).body("alpha\nbeta\ngamma\n");
        })
        .await;

    let config = config_for(
        &server.url("/words"),
        &output_path,
        "rows = 2\ncols = 2\nwords_per_phrase = 1",
    );

    // 每格先選模板再選單字: (identity, alpha) (bold, beta) (italic, gamma) (emphasis, alpha)
    let chooser = ScriptedChooser::new(&[2, 0, 0, 1, 1, 2, 4, 0]);
    let pipeline = TablePipeline::with_chooser(LocalStorage::default(), config, chooser);
    let mut engine = GenerationEngine::new(pipeline);

    let written = engine.run().await?;
    words_mock.assert_async().await;
    assert_eq!(written, output_path);

    let text = std::fs::read_to_string(&output_path)?;
    let module = parse_typescript_module(&text)?;
    assert_eq!(module.rows, 2);
    assert_eq!(module.cols, 2);
    assert_eq!(
        module.data,
        vec![
            vec!["alpha".to_string(), "<b>beta</b>".to_string()],
            vec!["<i>gamma</i>".to_string(), "<em>alpha</em>".to_string()],
        ]
    );
    assert!(text.starts_with("export const ROWS = 2;\nexport const COLS = 2;\n"));
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_seeded_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("out").join("data.ts");
    let output_path = output_path.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start_async().await;
    let words_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/dict/words");
            then.status(200)
                .header("Content-Type", "text/plain")
                .body("apple\nbanana\ncherry\nit's\ndate\n");
        })
        .await;

    let config = config_for(
        &server.url("/dict/words"),
        &output_path,
        "rows = 50\ncols = 6\nseed = 2024",
    );
    let mut engine = GenerationEngine::new(TablePipeline::new(LocalStorage::default(), config));
    engine.run().await?;
    words_mock.assert_async().await;

    let module = parse_typescript_module(&std::fs::read_to_string(&output_path)?)?;
    assert_eq!(module.rows, 50);
    assert_eq!(module.cols, 6);
    assert_eq!(module.data.len(), 50);

    let words = ["apple", "banana", "cherry", "it's", "date"];
    for row in &module.data {
        assert_eq!(row.len(), 6);
        for cell in row {
            let (_, phrase) = Wrapper::detect(cell);
            let tokens: Vec<&str> = phrase.split(' ').collect();
            assert_eq!(tokens.len(), 3);
            assert!(tokens.iter().all(|t| words.contains(t)), "unexpected cell {}", cell);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_same_seed_writes_identical_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/words");
            then.status(200).body("one\ntwo\nthree\nfour\n");
        })
        .await;

    let mut outputs = Vec::new();
    for name in ["first.ts", "second.ts"] {
        let path = temp_dir.path().join(name).to_str().unwrap().replace('\\', "/");
        let config = config_for(&server.url("/words"), &path, "rows = 20\ncols = 4\nseed = 7");
        let mut engine =
            GenerationEngine::new(TablePipeline::new(LocalStorage::default(), config));
        engine.run().await?;
        outputs.push(std::fs::read_to_string(&path)?);
    }

    assert_eq!(outputs[0], outputs[1]);
    Ok(())
}

#[tokio::test]
async fn test_json_output_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("data.json");
    let output_path = output_path.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/words");
            then.status(200).body("solo\n");
        })
        .await;

    let toml_content = format!(
        r#"
[source]
url = "{}"

[table]
rows = 3
cols = 2

[output]
path = "{}"
format = "json"
"#,
        server.url("/words"),
        output_path
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;
    assert_eq!(
        table_datagen::core::ConfigProvider::output_format(&config),
        OutputFormat::Json
    );

    let mut engine = GenerationEngine::new(TablePipeline::new(LocalStorage::default(), config));
    engine.run().await?;

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output_path)?)?;
    assert_eq!(value["rows"], 3);
    assert_eq!(value["cols"], 2);
    for cell in value["data"].as_array().unwrap().iter().flat_map(|r| r.as_array().unwrap()) {
        let (_, phrase) = Wrapper::detect(cell.as_str().unwrap());
        assert_eq!(phrase, "solo solo solo");
    }
    Ok(())
}

#[tokio::test]
async fn test_word_source_failure_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("data.ts");
    let output_path_str = output_path.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start_async().await;
    let words_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/failed");
            then.status(500);
        })
        .await;

    let config = config_for(&server.url("/failed"), &output_path_str, "rows = 2\ncols = 2");
    let mut engine = GenerationEngine::new(TablePipeline::new(LocalStorage::default(), config));

    let result = engine.run().await;
    words_mock.assert_async().await;

    let err = result.expect_err("a 500 from the word source must fail the run");
    assert_eq!(
        err.category(),
        table_datagen::utils::error::ErrorCategory::Network
    );
    assert!(!output_path.exists());
    Ok(())
}

#[tokio::test]
async fn test_empty_word_list_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("data.ts");
    let output_path_str = output_path.to_str().unwrap().replace('\\', "/");

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/words");
            then.status(200).body("\n\n");
        })
        .await;

    let config = config_for(&server.url("/words"), &output_path_str, "");
    let mut engine = GenerationEngine::new(TablePipeline::new(LocalStorage::default(), config));

    assert!(matches!(
        engine.run().await,
        Err(table_datagen::GenError::EmptyWordList { .. })
    ));
    assert!(!output_path.exists());
    Ok(())
}
