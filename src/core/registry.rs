use crate::core::birth_date::{check_birth_date_within, DEFAULT_MAX_AGE_YEARS};
use crate::core::contact::{is_valid_email, is_valid_us_phone};
use crate::core::postal::is_valid_us_postal_code;
use crate::domain::model::{BirthSex, ContactMethod, FieldId, FieldIssue};
use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("date pattern is valid"));

/// Everything a rule may consult besides the field value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
    pub max_birth_age_years: u32,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            max_birth_age_years: DEFAULT_MAX_AGE_YEARS,
        }
    }

    pub fn with_max_birth_age(mut self, years: u32) -> Self {
        self.max_birth_age_years = years;
        self
    }
}

pub type RuleCheck = fn(&str, &ValidationContext) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub check: RuleCheck,
    pub message: &'static str,
}

/// Maps each field to the ordered rules its value must pass.
///
/// Rules for one field run in registration order and stop at the first
/// failure, so a format error hides the more specific errors behind it.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: BTreeMap<FieldId, Vec<FieldRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field: FieldId, check: RuleCheck, message: &'static str) -> &mut Self {
        self.rules
            .entry(field)
            .or_default()
            .push(FieldRule { check, message });
        self
    }

    pub fn rules_for(&self, field: FieldId) -> &[FieldRule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.rules.keys().copied()
    }

    /// First failing rule for `value`, if any.
    pub fn check_field(&self, field: FieldId, value: &str, ctx: &ValidationContext) -> Option<FieldIssue> {
        self.rules_for(field)
            .iter()
            .find(|rule| !(rule.check)(value, ctx))
            .map(|rule| FieldIssue::new(field, rule.message))
    }

    /// The rule table of the patient intake form.
    pub fn intake() -> Self {
        let mut registry = Self::new();

        registry
            .register(FieldId::Physician, |v, _| !v.is_empty(), "You must select a valid option for Physician")
            .register(
                FieldId::ReferringProvider,
                |v, _| !v.is_empty(),
                "You must select a valid option for Referring Provider",
            )
            .register(FieldId::FirstName, |v, _| char_len(v) >= 2, "First name must be at least 2 characters")
            .register(FieldId::FirstName, |v, _| char_len(v) <= 50, "First name must be at most 50 characters")
            .register(FieldId::LastName, |v, _| char_len(v) >= 2, "Last name must be at least 2 characters")
            .register(FieldId::LastName, |v, _| char_len(v) <= 50, "Last name must be at most 50 characters")
            .register(FieldId::MobileNumber, |v, _| is_valid_us_phone(v), "Mobile number must be valid US number")
            .register(FieldId::HomeNumber, |v, _| is_valid_us_phone(v), "Home number must be a valid US number")
            .register(FieldId::Email, |v, _| is_valid_email(v), "Invalid email address")
            .register(
                FieldId::PreferredContactMethod,
                |v, _| v.parse::<ContactMethod>().is_ok(),
                "Invalid option for Preferred Contact Method",
            )
            .register(FieldId::BirthSex, |v, _| v.parse::<BirthSex>().is_ok(), "Invalid option for Birth Sex")
            .register(FieldId::DateOfBirth, |v, _| DATE_PATTERN.is_match(v), "Date must be in mm-dd-yyyy format")
            .register(
                FieldId::DateOfBirth,
                |v, ctx| check_birth_date_within(v, ctx.today, ctx.max_birth_age_years).is_ok(),
                "Invalid date of birth",
            )
            .register(FieldId::AddressLine1, |v, _| char_len(v) >= 5, "Please enter a valid address")
            .register(FieldId::City, |v, _| (2..=30).contains(&char_len(v)), "Enter a valid city name")
            .register(FieldId::State, |v, _| char_len(v) >= 2, "Enter a valid state name")
            .register(FieldId::PostalCode, |v, _| is_valid_us_postal_code(v), "Enter a valid US postal code")
            .register(FieldId::PrimaryInsuranceCompany, |v, _| !v.is_empty(), "Invalid Insurance Company")
            .register(
                FieldId::PrimaryInsuranceMemberId,
                |v, _| char_len(v) >= 5,
                "Invalid Insurance Member ID",
            );

        registry
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
