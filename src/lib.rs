//! Validation and autocomplete core for a patient intake form.
//!
//! The functions in [`core`] are pure: they take the raw field text (and the
//! current date where it matters) and report accept or reject. Rendering and
//! form state belong to whatever UI drives them.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::config::{cli::CsvCandidateSource, toml_config::IntakeConfig};
pub use crate::core::birth_date::{check_birth_date, is_valid_birth_date, BirthDate, BirthDateError};
pub use crate::core::catalog::{CandidateCatalog, CandidateList, Suggestions};
pub use crate::core::intake::{IntakeValidator, ValidationReport};
pub use crate::core::postal::is_valid_us_postal_code;
pub use crate::core::registry::{RuleRegistry, ValidationContext};
pub use crate::core::suggest::{auto_select_value, filter_candidates, matches_word_start, should_auto_select};
pub use crate::domain::model::{FieldId, FieldIssue, IntakeForm};
pub use crate::utils::error::{IntakeError, Result};
