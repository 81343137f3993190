use anyhow::Result;
use chrono::NaiveDate;
use intake_check::config::cli::read_form_file;
use intake_check::{FieldId, IntakeConfig, IntakeForm, IntakeValidator, RuleRegistry, ValidationContext};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

const SUBMISSION: &str = r#"{
    "physician": "Dr. John Smith",
    "referring_provider": "Dr. Jane Roe",
    "first_name": "Alex",
    "last_name": "Morgan",
    "mobile_number": "+1 (512) 555-0100",
    "email": "alex.morgan@example.com",
    "preferred_contact_method": "Mobile Number",
    "birth_sex": "Prefer Not to Say",
    "date_of_birth": "07-04-1988",
    "address_line_1": "400 Congress Ave",
    "city": "Austin",
    "state": "Texas",
    "postal_code": "78701-1234",
    "primary_insurance_company": "Blue Cross Blue Shield",
    "primary_insurance_member_id": "BCBS-778812"
}"#;

#[test]
fn test_submission_from_json_file_is_accepted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let form_path = temp_dir.path().join("submission.json");
    std::fs::write(&form_path, SUBMISSION)?;

    let form = read_form_file(&form_path)?;
    let validator = IntakeValidator::new(today());
    assert!(validator.validate(&form).is_ok());
    Ok(())
}

#[test]
fn test_rejections_carry_form_messages() -> Result<()> {
    let mut form: IntakeForm = serde_json::from_str(SUBMISSION)?;
    form.first_name = "A".to_string();
    form.birth_sex = "Unknown".to_string();
    form.date_of_birth = "7-4-1988".to_string();
    form.city = "X".repeat(31);
    form.postal_code = "ABCDE".to_string();
    form.primary_insurance_member_id = "1234".to_string();

    let report = IntakeValidator::new(today()).validate(&form).unwrap_err();
    let grouped = report.by_field();

    assert_eq!(grouped[&FieldId::FirstName], vec!["First name must be at least 2 characters"]);
    assert_eq!(grouped[&FieldId::BirthSex], vec!["Invalid option for Birth Sex"]);
    assert_eq!(grouped[&FieldId::DateOfBirth], vec!["Date must be in mm-dd-yyyy format"]);
    assert_eq!(grouped[&FieldId::City], vec!["Enter a valid city name"]);
    assert_eq!(grouped[&FieldId::PostalCode], vec!["Enter a valid US postal code"]);
    assert_eq!(grouped[&FieldId::PrimaryInsuranceMemberId], vec!["Invalid Insurance Member ID"]);
    assert_eq!(report.issues().len(), 6);
    Ok(())
}

#[test]
fn test_cross_field_rules() -> Result<()> {
    let mut form: IntakeForm = serde_json::from_str(SUBMISSION)?;
    form.mobile_number = None;
    form.secondary_insurance_member_id = Some("SEC-1".to_string());

    let report = IntakeValidator::new(today()).validate(&form).unwrap_err();
    assert_eq!(
        report.messages_for(FieldId::MobileNumber),
        vec!["Either mobile number or home number must be provided"]
    );
    assert!(report.has_issue(FieldId::SecondaryInsuranceCompany));
    assert_eq!(report.issues().len(), 2);
    Ok(())
}

#[test]
fn test_age_window_from_config() -> Result<()> {
    let config = IntakeConfig::from_toml_str(
        r#"
[validation]
max_birth_age_years = 30
"#,
    )?;
    let form: IntakeForm = serde_json::from_str(SUBMISSION)?;

    let strict = IntakeValidator::from_config(&config, today());
    let report = strict.validate(&form).unwrap_err();
    assert_eq!(report.messages_for(FieldId::DateOfBirth), vec!["Invalid date of birth"]);
    assert_eq!(strict.context().max_birth_age_years, 30);
    Ok(())
}

#[test]
fn test_custom_registry_replaces_rules() -> Result<()> {
    let mut registry = RuleRegistry::new();
    registry.register(FieldId::State, |v, _| v.len() == 2, "Use the two-letter state code");

    let validator = IntakeValidator::with_registry(registry, ValidationContext::new(today()));
    let mut form: IntakeForm = serde_json::from_str(SUBMISSION)?;

    let report = validator.validate(&form).unwrap_err();
    assert_eq!(report.messages_for(FieldId::State), vec!["Use the two-letter state code"]);

    form.state = "TX".to_string();
    assert!(validator.validate(&form).is_ok());
    Ok(())
}

#[test]
fn test_demo_submissions() -> Result<()> {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let validator = IntakeValidator::new(today());

    let accepted = read_form_file(demos.join("submission.json"))?;
    assert!(validator.validate(&accepted).is_ok());

    let rejected = read_form_file(demos.join("rejected.toml"))?;
    let report = validator.validate(&rejected).unwrap_err();
    let fields: Vec<FieldId> = report.by_field().into_keys().collect();
    assert_eq!(
        fields,
        vec![
            FieldId::FirstName,
            FieldId::MobileNumber,
            FieldId::Email,
            FieldId::DateOfBirth,
            FieldId::PostalCode,
            FieldId::SecondaryInsuranceCompany,
        ]
    );
    Ok(())
}
