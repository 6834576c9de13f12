//! Volunteer registration intake: form state, eligibility, gating, and the
//! submission workflow that persists accepted registrations.
//!
//! The workflow is deliberately small: a pure age calculator, an immutable
//! form snapshot, a stateless gate, and a service that talks to the outside
//! world only through the [`store::RecordStore`] and
//! [`store::ConfirmationNavigator`] ports.

pub mod domain;
pub mod eligibility;
pub mod form;
pub mod gate;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    event_dates, EventLocation, PriorExperience, RoleCategory, VolunteerId, VolunteerRegistration,
    VolunteerRole,
};
pub use eligibility::{age_on, AgeProfile, MINIMUM_VOLUNTEER_AGE, UNDERAGE_MESSAGE};
pub use form::{FormChange, RegistrationForm};
pub use gate::{can_submit, outstanding_requirements, RequiredField};
pub use router::registration_router;
pub use service::{RegistrationService, SubmissionError};
pub use store::{
    ConfirmationNavigator, RecordId, RecordStore, StoreError, CONFIRMATION_ROUTE,
    VOLUNTEERS_COLLECTION,
};
