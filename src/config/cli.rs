use crate::config::toml_config::IntakeConfig;
use crate::core::catalog::{CandidateList, Suggestions};
use crate::core::intake::IntakeValidator;
use crate::core::{CandidateSource, IntakeForm};
use crate::utils::error::{IntakeError, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads candidate lists from CSV files under a base directory.
///
/// Only the first column is read. Blank rows and blank names are skipped and
/// surrounding whitespace is trimmed.
#[derive(Debug, Clone)]
pub struct CsvCandidateSource {
    base_path: PathBuf,
    has_headers: bool,
}

impl CsvCandidateSource {
    pub fn new(base_path: impl Into<PathBuf>, has_headers: bool) -> Self {
        Self {
            base_path: base_path.into(),
            has_headers,
        }
    }
}

impl CandidateSource for CsvCandidateSource {
    fn load_candidates(&self, path: &Path) -> Result<Vec<String>> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading candidates from {}", full_path.display());

        // 先開檔，讓找不到檔案回報為 I/O 錯誤而不是 CSV 錯誤
        let file = fs::File::open(&full_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut candidates = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(name) = record.get(0).filter(|name| !name.is_empty()) {
                candidates.push(name.to_string());
            }
        }

        Ok(candidates)
    }
}

/// 讀取表單提交檔案，依副檔名決定 JSON 或 TOML
pub fn read_form_file<P: AsRef<Path>>(path: P) -> Result<IntakeForm> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("toml") => toml::from_str(&content).map_err(|e| IntakeError::ConfigValidationError {
            field: path.display().to_string(),
            message: e.to_string(),
        }),
        _ => Err(IntakeError::InvalidConfigValueError {
            field: "form".to_string(),
            value: path.display().to_string(),
            reason: "Form file must end in .json or .toml".to_string(),
        }),
    }
}

/// `validate` 子命令：讀取表單並驗證，被拒時回傳 `FormRejected`
pub fn validate_form_file<P: AsRef<Path>>(config: &IntakeConfig, path: P, today: NaiveDate) -> Result<IntakeForm> {
    let submission = read_form_file(path)?;

    IntakeValidator::from_config(config, today)
        .validate(&submission)
        .map_err(|report| IntakeError::FormRejected {
            issues: report.into_issues(),
        })?;

    Ok(submission)
}

/// `suggest` 子命令：只讀取被查詢的清單
pub fn suggest_from_config(config: &IntakeConfig, list: CandidateList, query: &str) -> Result<Suggestions> {
    let source = CsvCandidateSource::new(&config.catalog.base_path, config.catalog.has_headers);
    let catalog = config.load_list(&source, list)?;
    if catalog.candidates(list).is_empty() {
        tracing::warn!("⚠️ {} list is empty", list);
    }

    let suggestions = catalog.suggest(list, query);
    tracing::debug!("{} suggestion(s) for {:?}", suggestions.candidates.len(), query);
    Ok(suggestions)
}
