use crate::domain::model::FieldIssue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown candidate list: {name}")]
    UnknownCandidateList { name: String },

    #[error("Form rejected with {} issue(s)", .issues.len())]
    FormRejected { issues: Vec<FieldIssue> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Data,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl IntakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IntakeError::IoError(_) => ErrorCategory::Io,
            IntakeError::CsvError(_) | IntakeError::SerializationError(_) => ErrorCategory::Data,
            IntakeError::ConfigValidationError { .. }
            | IntakeError::InvalidConfigValueError { .. }
            | IntakeError::MissingConfigError { .. }
            | IntakeError::UnknownCandidateList { .. } => ErrorCategory::Configuration,
            IntakeError::FormRejected { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 表單被拒是正常結果
            ErrorCategory::Validation => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IntakeError::IoError(e) => format!("Could not read an input file: {}", e),
            IntakeError::CsvError(e) => format!("A candidate list file is malformed: {}", e),
            IntakeError::SerializationError(e) => format!("The submitted form is not valid JSON: {}", e),
            IntakeError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            IntakeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            IntakeError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            IntakeError::UnknownCandidateList { name } => {
                format!("There is no candidate list called '{}'", name)
            }
            IntakeError::FormRejected { issues } => {
                let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
                format!("The form has problems in: {}", fields.join(", "))
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IntakeError::IoError(_) => "Check that the file exists and is readable",
            IntakeError::CsvError(_) => "Make sure each candidate list is a CSV file with one name per row",
            IntakeError::SerializationError(_) => "Check the form file for syntax errors",
            IntakeError::ConfigValidationError { .. } => "Make sure the configuration file is valid TOML",
            IntakeError::InvalidConfigValueError { .. } => "Fix the highlighted configuration value",
            IntakeError::MissingConfigError { .. } => "Add the missing entry to the configuration file",
            IntakeError::UnknownCandidateList { .. } => {
                "Use one of: physicians, referring-providers, insurance-companies, states"
            }
            IntakeError::FormRejected { .. } => "Correct the listed fields and submit again",
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
