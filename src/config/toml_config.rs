use crate::core::birth_date::DEFAULT_MAX_AGE_YEARS;
use crate::core::catalog::{CandidateCatalog, CandidateList};
use crate::core::{CandidateSource, ConfigProvider};
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub validation: Option<ValidationConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
    pub physicians: Option<String>,
    pub referring_providers: Option<String>,
    pub insurance_companies: Option<String>,
    pub states: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            has_headers: default_has_headers(),
            physicians: None,
            referring_providers: None,
            insurance_companies: None,
            states: None,
        }
    }
}

fn default_base_path() -> String {
    ".".to_string()
}

fn default_has_headers() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    pub max_birth_age_years: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl IntakeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IntakeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IntakeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${INTAKE_DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Configured file for each candidate list, in list order.
    pub fn list_paths(&self) -> Vec<(CandidateList, &str)> {
        let catalog = &self.catalog;
        [
            (CandidateList::Physicians, &catalog.physicians),
            (CandidateList::ReferringProviders, &catalog.referring_providers),
            (CandidateList::InsuranceCompanies, &catalog.insurance_companies),
            (CandidateList::States, &catalog.states),
        ]
        .into_iter()
        .filter_map(|(list, path)| path.as_deref().map(|p| (list, p)))
        .collect()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn list_path(&self, list: CandidateList) -> Option<&str> {
        self.list_paths()
            .into_iter()
            .find(|(configured, _)| *configured == list)
            .map(|(_, path)| path)
    }

    /// 載入所有已設定的清單
    pub fn load_catalog<S: CandidateSource>(&self, source: &S) -> Result<CandidateCatalog> {
        let mut catalog = CandidateCatalog::new();
        for (list, path) in self.list_paths() {
            catalog.insert(list, load_candidates_logged(source, list, path)?);
        }
        Ok(catalog)
    }

    /// 只載入單一清單，其他清單的檔案不會被讀取
    pub fn load_list<S: CandidateSource>(&self, source: &S, list: CandidateList) -> Result<CandidateCatalog> {
        let path = self
            .list_path(list)
            .ok_or_else(|| IntakeError::MissingConfigError {
                field: list.config_key(),
            })?;
        let candidates = load_candidates_logged(source, list, path)?;
        Ok(CandidateCatalog::new().with_list(list, candidates))
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("catalog.base_path", &self.catalog.base_path)?;

        for (list, path) in self.list_paths() {
            let field = list.config_key();
            validation::validate_path(&field, path)?;
            validation::validate_file_extension(&field, path, &["csv"])?;
        }

        if let Some(years) = self.validation.as_ref().and_then(|v| v.max_birth_age_years) {
            validation::validate_range("validation.max_birth_age_years", years, 1, 200)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

fn load_candidates_logged<S: CandidateSource>(source: &S, list: CandidateList, path: &str) -> Result<Vec<String>> {
    let candidates = source.load_candidates(Path::new(path))?;
    tracing::info!("📋 Loaded {} {} from {}", candidates.len(), list, path);
    Ok(candidates)
}

impl ConfigProvider for IntakeConfig {
    fn max_birth_age_years(&self) -> u32 {
        self.validation
            .as_ref()
            .and_then(|v| v.max_birth_age_years)
            .unwrap_or(DEFAULT_MAX_AGE_YEARS)
    }
}

impl Validate for IntakeConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
