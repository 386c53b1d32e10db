use crate::config::MAX_WORDS_PER_PHRASE;
use crate::core::{ConfigProvider, OutputFormat, TableShape};
use crate::domain::model::{
    DEFAULT_COLS, DEFAULT_OUTPUT_PATH, DEFAULT_ROWS, DEFAULT_SOURCE_URL,
    DEFAULT_WORDS_PER_PHRASE,
};
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub words_per_phrase: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GenError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WORDS_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GenError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_url(&self) -> &str {
        self.source.url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn shape(&self) -> TableShape {
        TableShape {
            rows: self.table.rows.unwrap_or(DEFAULT_ROWS),
            cols: self.table.cols.unwrap_or(DEFAULT_COLS),
        }
    }

    fn words_per_phrase(&self) -> usize {
        self.table
            .words_per_phrase
            .unwrap_or(DEFAULT_WORDS_PER_PHRASE)
    }

    fn seed(&self) -> Option<u64> {
        self.table.seed
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.url", self.source_url())?;
        validation::validate_path("output.path", self.output_path())?;
        let shape = self.shape();
        validation::validate_positive_number("table.rows", shape.rows, 1)?;
        validation::validate_positive_number("table.cols", shape.cols, 1)?;
        validation::validate_range(
            "table.words_per_phrase",
            self.words_per_phrase(),
            1,
            MAX_WORDS_PER_PHRASE,
        )?;
        Ok(())
    }
}
