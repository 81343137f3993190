use crate::core::registry::{RuleRegistry, ValidationContext};
use crate::domain::model::{FieldId, FieldIssue, IntakeForm};
use crate::domain::ports::ConfigProvider;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// All problems found in one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<FieldIssue> {
        self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_issue(&self, field: FieldId) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    pub fn messages_for(&self, field: FieldId) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    pub fn by_field(&self) -> BTreeMap<FieldId, Vec<&str>> {
        let mut grouped: BTreeMap<FieldId, Vec<&str>> = BTreeMap::new();
        for issue in &self.issues {
            grouped.entry(issue.field).or_default().push(issue.message.as_str());
        }
        grouped
    }

    fn push(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }
}

/// Runs the field rules and then the form-level rules over a submission.
pub struct IntakeValidator {
    registry: RuleRegistry,
    context: ValidationContext,
}

impl IntakeValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_registry(RuleRegistry::intake(), ValidationContext::new(today))
    }

    pub fn from_config<C: ConfigProvider>(config: &C, today: NaiveDate) -> Self {
        let context = ValidationContext::new(today).with_max_birth_age(config.max_birth_age_years());
        Self::with_registry(RuleRegistry::intake(), context)
    }

    pub fn with_registry(registry: RuleRegistry, context: ValidationContext) -> Self {
        Self { registry, context }
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    pub fn validate(&self, form: &IntakeForm) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::default();

        for field in FieldId::ALL {
            let value = match form.value(field) {
                Some(value) => value,
                // 選填欄位留白時不檢查
                None if field.is_optional() => continue,
                None => "",
            };

            if let Some(issue) = self.registry.check_field(field, value, &self.context) {
                tracing::debug!("{}", issue);
                report.push(issue);
            }
        }

        for issue in cross_field_issues(form) {
            tracing::debug!("{}", issue);
            report.push(issue);
        }

        if report.is_empty() {
            tracing::debug!("intake form accepted");
            Ok(())
        } else {
            Err(report)
        }
    }
}

fn cross_field_issues(form: &IntakeForm) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if form.value(FieldId::MobileNumber).is_none() && form.value(FieldId::HomeNumber).is_none() {
        issues.push(FieldIssue::new(
            FieldId::MobileNumber,
            "Either mobile number or home number must be provided",
        ));
    }

    if form.value(FieldId::SecondaryInsuranceMemberId).is_some()
        && form.value(FieldId::SecondaryInsuranceCompany).is_none()
    {
        issues.push(FieldIssue::new(
            FieldId::SecondaryInsuranceCompany,
            "Both secondary insurance company and secondary insurance member ID must be provided if one is filled",
        ));
    }

    issues
}
