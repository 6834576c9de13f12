use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Volunteers younger than this on the day of submission are turned away.
pub const MINIMUM_VOLUNTEER_AGE: i32 = 12;

/// Fixed message shown whenever the minimum-age rule fails.
pub const UNDERAGE_MESSAGE: &str =
    "Sorry, volunteers must be at least 12 years old to participate.";

/// Whole elapsed years between `birth_date` and `today`.
///
/// The year difference is decremented when the birthday has not yet occurred
/// this year, compared lexicographically on (month, day) so Feb 29 birthdays
/// roll over on Mar 1 in common years.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Derived age state carried on the registration form.
///
/// An absent birth date leaves the age undefined and the profile vacuously
/// eligible, so no error is shown before the field is filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeProfile {
    pub age: Option<i32>,
    pub eligible: bool,
}

impl AgeProfile {
    pub const fn empty() -> Self {
        Self {
            age: None,
            eligible: true,
        }
    }

    pub fn from_birth_date(birth_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match birth_date {
            Some(birth) => {
                let age = age_on(birth, today);
                Self {
                    age: Some(age),
                    eligible: age >= MINIMUM_VOLUNTEER_AGE,
                }
            }
            None => Self::empty(),
        }
    }

    /// Inline message for the presentation layer, present only when the
    /// minimum-age rule fails.
    pub fn message(&self) -> Option<&'static str> {
        if self.eligible {
            None
        } else {
            Some(UNDERAGE_MESSAGE)
        }
    }
}

impl Default for AgeProfile {
    fn default() -> Self {
        Self::empty()
    }
}
