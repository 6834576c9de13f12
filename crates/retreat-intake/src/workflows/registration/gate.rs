use serde::{Deserialize, Serialize};

use super::form::RegistrationForm;

/// Required attributes the gate inspects, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequiredField {
    FullName,
    DateOfBirth,
    Email,
    Phone,
    PreferredRole,
    PriorExperience,
    PreferredLocation,
    EmergencyContactName,
    EmergencyContactPhone,
    Agreement,
    Signature,
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            RequiredField::FullName => "full name",
            RequiredField::DateOfBirth => "date of birth",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::PreferredRole => "preferred role",
            RequiredField::PriorExperience => "prior experience",
            RequiredField::PreferredLocation => "preferred location",
            RequiredField::EmergencyContactName => "emergency contact name",
            RequiredField::EmergencyContactPhone => "emergency contact phone",
            RequiredField::Agreement => "volunteer agreement",
            RequiredField::Signature => "signature",
        }
    }
}

/// Required attributes that are still empty, absent, malformed, or false.
pub fn outstanding_requirements(form: &RegistrationForm) -> Vec<RequiredField> {
    let mut outstanding = Vec::new();

    if form.full_name.trim().is_empty() {
        outstanding.push(RequiredField::FullName);
    }
    if form.date_of_birth.is_none() {
        outstanding.push(RequiredField::DateOfBirth);
    }
    if !email_shaped(&form.email) {
        outstanding.push(RequiredField::Email);
    }
    if !phone_shaped(&form.phone) {
        outstanding.push(RequiredField::Phone);
    }
    if form.preferred_role.is_none() {
        outstanding.push(RequiredField::PreferredRole);
    }
    if form.prior_experience.is_none() {
        outstanding.push(RequiredField::PriorExperience);
    }
    if form.preferred_location.is_none() {
        outstanding.push(RequiredField::PreferredLocation);
    }
    if form.emergency_contact_name.trim().is_empty() {
        outstanding.push(RequiredField::EmergencyContactName);
    }
    if form.emergency_contact_phone.trim().is_empty() {
        outstanding.push(RequiredField::EmergencyContactPhone);
    }
    if !form.agreement_accepted {
        outstanding.push(RequiredField::Agreement);
    }
    if form.signature.trim().is_empty() {
        outstanding.push(RequiredField::Signature);
    }

    outstanding
}

/// Authoritative submission predicate: every required attribute present and
/// the minimum-age rule satisfied. Pure and cheap, recomputed on demand.
pub fn can_submit(form: &RegistrationForm) -> bool {
    outstanding_requirements(form).is_empty() && form.age.eligible
}

/// Loose structural check: non-empty local part, one `@`, dotted domain.
pub fn email_shaped(raw: &str) -> bool {
    let value = raw.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}

/// Regional mobile pattern: optional `+971` or leading `0`, then `5` followed
/// by eight digits.
pub fn phone_shaped(raw: &str) -> bool {
    let value = raw.trim();
    let rest = value
        .strip_prefix("+971")
        .or_else(|| value.strip_prefix('0'))
        .unwrap_or(value);
    rest.len() == 9 && rest.starts_with('5') && rest.chars().all(|c| c.is_ascii_digit())
}
