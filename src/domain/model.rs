use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A raw intake submission, exactly as the form layer collected it.
///
/// Every value is the text the patient typed or picked; nothing here has been
/// validated yet. Optional fields are `None` when left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub physician: String,
    pub referring_provider: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub mobile_number: Option<String>,
    pub home_number: Option<String>,
    pub email: String,
    pub preferred_contact_method: String,
    pub birth_sex: String,
    pub date_of_birth: String,
    pub address_line_1: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub primary_insurance_company: String,
    pub primary_insurance_member_id: String,
    pub secondary_insurance_company: Option<String>,
    pub secondary_insurance_member_id: Option<String>,
}

impl IntakeForm {
    /// Raw value of `field`. Blank optional fields read as `None`.
    pub fn value(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Physician => required(&self.physician),
            FieldId::ReferringProvider => required(&self.referring_provider),
            FieldId::FirstName => required(&self.first_name),
            FieldId::MiddleName => optional(&self.middle_name),
            FieldId::LastName => required(&self.last_name),
            FieldId::MobileNumber => optional(&self.mobile_number),
            FieldId::HomeNumber => optional(&self.home_number),
            FieldId::Email => required(&self.email),
            FieldId::PreferredContactMethod => required(&self.preferred_contact_method),
            FieldId::BirthSex => required(&self.birth_sex),
            FieldId::DateOfBirth => required(&self.date_of_birth),
            FieldId::AddressLine1 => required(&self.address_line_1),
            FieldId::City => required(&self.city),
            FieldId::State => required(&self.state),
            FieldId::PostalCode => required(&self.postal_code),
            FieldId::PrimaryInsuranceCompany => required(&self.primary_insurance_company),
            FieldId::PrimaryInsuranceMemberId => required(&self.primary_insurance_member_id),
            FieldId::SecondaryInsuranceCompany => optional(&self.secondary_insurance_company),
            FieldId::SecondaryInsuranceMemberId => optional(&self.secondary_insurance_member_id),
        }
    }
}

fn required(value: &str) -> Option<&str> {
    Some(value)
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Every field on the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Physician,
    ReferringProvider,
    FirstName,
    MiddleName,
    LastName,
    MobileNumber,
    HomeNumber,
    Email,
    PreferredContactMethod,
    BirthSex,
    DateOfBirth,
    AddressLine1,
    City,
    State,
    PostalCode,
    PrimaryInsuranceCompany,
    PrimaryInsuranceMemberId,
    SecondaryInsuranceCompany,
    SecondaryInsuranceMemberId,
}

impl FieldId {
    pub const ALL: [FieldId; 19] = [
        FieldId::Physician,
        FieldId::ReferringProvider,
        FieldId::FirstName,
        FieldId::MiddleName,
        FieldId::LastName,
        FieldId::MobileNumber,
        FieldId::HomeNumber,
        FieldId::Email,
        FieldId::PreferredContactMethod,
        FieldId::BirthSex,
        FieldId::DateOfBirth,
        FieldId::AddressLine1,
        FieldId::City,
        FieldId::State,
        FieldId::PostalCode,
        FieldId::PrimaryInsuranceCompany,
        FieldId::PrimaryInsuranceMemberId,
        FieldId::SecondaryInsuranceCompany,
        FieldId::SecondaryInsuranceMemberId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Physician => "physician",
            FieldId::ReferringProvider => "referring_provider",
            FieldId::FirstName => "first_name",
            FieldId::MiddleName => "middle_name",
            FieldId::LastName => "last_name",
            FieldId::MobileNumber => "mobile_number",
            FieldId::HomeNumber => "home_number",
            FieldId::Email => "email",
            FieldId::PreferredContactMethod => "preferred_contact_method",
            FieldId::BirthSex => "birth_sex",
            FieldId::DateOfBirth => "date_of_birth",
            FieldId::AddressLine1 => "address_line_1",
            FieldId::City => "city",
            FieldId::State => "state",
            FieldId::PostalCode => "postal_code",
            FieldId::PrimaryInsuranceCompany => "primary_insurance_company",
            FieldId::PrimaryInsuranceMemberId => "primary_insurance_member_id",
            FieldId::SecondaryInsuranceCompany => "secondary_insurance_company",
            FieldId::SecondaryInsuranceMemberId => "secondary_insurance_member_id",
        }
    }

    /// Fields the patient may leave blank.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            FieldId::MiddleName
                | FieldId::MobileNumber
                | FieldId::HomeNumber
                | FieldId::SecondaryInsuranceCompany
                | FieldId::SecondaryInsuranceMemberId
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rejection, attached to the field the user should fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    HomeNumber,
    MobileNumber,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 3] = [
        ContactMethod::Email,
        ContactMethod::HomeNumber,
        ContactMethod::MobileNumber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Email => "Email",
            ContactMethod::HomeNumber => "Home Number",
            ContactMethod::MobileNumber => "Mobile Number",
        }
    }
}

impl FromStr for ContactMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|m| m.label() == s).ok_or(())
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthSex {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl BirthSex {
    pub const ALL: [BirthSex; 4] = [
        BirthSex::Male,
        BirthSex::Female,
        BirthSex::Other,
        BirthSex::PreferNotToSay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BirthSex::Male => "Male",
            BirthSex::Female => "Female",
            BirthSex::Other => "Other",
            BirthSex::PreferNotToSay => "Prefer Not to Say",
        }
    }
}

impl FromStr for BirthSex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|b| b.label() == s).ok_or(())
    }
}

impl fmt::Display for BirthSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
