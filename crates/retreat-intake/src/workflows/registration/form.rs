use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{EventLocation, PriorExperience, VolunteerRole};
use super::eligibility::AgeProfile;

/// Everything the volunteer has entered so far, one snapshot per mutation.
///
/// Field updates go through [`RegistrationForm::apply`], which returns a new
/// snapshot; the caller decides whether to keep or discard it. The derived
/// `age` profile is recomputed inside the same update that changes the birth
/// date, never edited on its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip)]
    pub age: AgeProfile,
    pub email: String,
    pub phone: String,
    pub preferred_role: Option<VolunteerRole>,
    pub prior_experience: Option<PriorExperience>,
    pub preferred_location: Option<EventLocation>,
    pub tshirt_size: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub available_dates: BTreeSet<NaiveDate>,
    pub agreement_accepted: bool,
    pub signature: String,
}

/// Single-field change events emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FormChange {
    FullName(String),
    DateOfBirth(Option<NaiveDate>),
    Email(String),
    Phone(String),
    PreferredRole(Option<VolunteerRole>),
    PriorExperience(Option<PriorExperience>),
    PreferredLocation(Option<EventLocation>),
    TshirtSize(String),
    EmergencyContactName(String),
    EmergencyContactPhone(String),
    AgreementAccepted(bool),
    Signature(String),
}

impl RegistrationForm {
    /// Apply one field change and return the resulting snapshot.
    ///
    /// `today` feeds the age recomputation when the birth date changes; the
    /// other changes ignore it.
    pub fn apply(mut self, change: FormChange, today: NaiveDate) -> Self {
        match change {
            FormChange::FullName(value) => self.full_name = value,
            FormChange::DateOfBirth(value) => {
                self.date_of_birth = value;
                return self.with_recomputed_age(today);
            }
            FormChange::Email(value) => self.email = value,
            FormChange::Phone(value) => self.phone = value,
            FormChange::PreferredRole(value) => self.preferred_role = value,
            FormChange::PriorExperience(value) => self.prior_experience = value,
            FormChange::PreferredLocation(value) => self.preferred_location = value,
            FormChange::TshirtSize(value) => self.tshirt_size = value,
            FormChange::EmergencyContactName(value) => self.emergency_contact_name = value,
            FormChange::EmergencyContactPhone(value) => self.emergency_contact_phone = value,
            FormChange::AgreementAccepted(value) => self.agreement_accepted = value,
            FormChange::Signature(value) => self.signature = value,
        }
        self
    }

    /// Symmetric availability toggle: adds the date when absent, removes it
    /// when present. Applying the same toggle twice restores the prior set.
    pub fn toggle_available_date(mut self, date: NaiveDate) -> Self {
        if !self.available_dates.remove(&date) {
            self.available_dates.insert(date);
        }
        self
    }

    /// Re-derive the age profile from the current birth date.
    ///
    /// The age is skipped during deserialization, so inbound payloads must be
    /// normalized through this before the gate reads them.
    pub fn with_recomputed_age(mut self, today: NaiveDate) -> Self {
        self.age = AgeProfile::from_birth_date(self.date_of_birth, today);
        self
    }
}
