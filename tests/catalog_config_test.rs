use anyhow::Result;
use intake_check::config::cli::suggest_from_config;
use intake_check::utils::error::ErrorSeverity;
use intake_check::utils::validation::Validate;
use intake_check::{CandidateList, CsvCandidateSource, IntakeConfig, IntakeError};
use tempfile::TempDir;

fn write_catalog(dir: &TempDir) -> Result<()> {
    std::fs::write(
        dir.path().join("physicians.csv"),
        "name\nDr. John Smith\nDr. Jane Roe\nDr. Johanna Smithers\n",
    )?;
    std::fs::write(
        dir.path().join("insurance.csv"),
        "name\nAetna\nBlue Cross Blue Shield\nCigna\nUnitedHealthcare\n",
    )?;
    Ok(())
}

#[test]
fn test_catalog_loaded_from_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_catalog(&temp_dir)?;
    let base_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let config = IntakeConfig::from_toml_str(&format!(
        r#"
[catalog]
base_path = "{}"
physicians = "physicians.csv"
insurance_companies = "insurance.csv"
"#,
        base_path
    ))?;
    config.validate()?;

    let source = CsvCandidateSource::new(&config.catalog.base_path, config.catalog.has_headers);
    let catalog = config.load_catalog(&source)?;

    assert_eq!(catalog.candidates(CandidateList::Physicians).len(), 3);
    assert!(catalog.candidates(CandidateList::States).is_empty());

    let suggestions = catalog.suggest(CandidateList::Physicians, "jo smith");
    assert_eq!(suggestions.candidates, vec!["Dr. John Smith", "Dr. Johanna Smithers"]);
    assert_eq!(suggestions.auto_select, None);

    let suggestions = catalog.suggest(CandidateList::Physicians, "johan");
    assert_eq!(suggestions.auto_select.as_deref(), Some("Dr. Johanna Smithers"));

    let suggestions = catalog.suggest(CandidateList::InsuranceCompanies, "blue sh");
    assert_eq!(suggestions.auto_select.as_deref(), Some("Blue Cross Blue Shield"));
    Ok(())
}

#[test]
fn test_missing_list_file_fails_to_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = IntakeConfig::from_toml_str(
        r#"
[catalog]
states = "us-states.csv"
"#,
    )?;

    let source = CsvCandidateSource::new(temp_dir.path(), true);
    let err = config.load_catalog(&source).unwrap_err();
    assert!(matches!(err, IntakeError::IoError(_)));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert_eq!(err.exit_code(), 3);
    Ok(())
}

#[test]
fn test_bundled_catalog() -> Result<()> {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = IntakeConfig::from_file(root.join("intake.toml"))?;
    config.validate()?;

    let source = CsvCandidateSource::new(root.join(&config.catalog.base_path), config.catalog.has_headers);
    let catalog = config.load_catalog(&source)?;

    assert_eq!(catalog.candidates(CandidateList::States).len(), 50);
    let suggestions = catalog.suggest(CandidateList::States, "new y");
    assert_eq!(suggestions.auto_select.as_deref(), Some("New York"));
    let suggestions = catalog.suggest(CandidateList::States, "north");
    assert_eq!(suggestions.candidates, vec!["North Carolina", "North Dakota"]);
    Ok(())
}

#[test]
fn test_suggest_loads_only_the_requested_list() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_catalog(&temp_dir)?;
    let base_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    // states 指向不存在的檔案，查詢 physicians 時不應被讀取
    let config = IntakeConfig::from_toml_str(&format!(
        r#"
[catalog]
base_path = "{}"
physicians = "physicians.csv"
states = "us-states.csv"
"#,
        base_path
    ))?;

    let suggestions = suggest_from_config(&config, CandidateList::Physicians, "jane")?;
    assert_eq!(suggestions.auto_select.as_deref(), Some("Dr. Jane Roe"));

    let err = suggest_from_config(&config, CandidateList::InsuranceCompanies, "aetna").unwrap_err();
    assert!(matches!(err, IntakeError::MissingConfigError { .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}
