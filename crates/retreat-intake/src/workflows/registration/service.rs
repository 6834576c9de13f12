use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{VolunteerId, VolunteerRegistration};
use super::eligibility::{age_on, MINIMUM_VOLUNTEER_AGE, UNDERAGE_MESSAGE};
use super::form::RegistrationForm;
use super::gate::{outstanding_requirements, RequiredField};
use super::store::{
    ConfirmationNavigator, RecordStore, StoreError, CONFIRMATION_ROUTE, VOLUNTEERS_COLLECTION,
};

/// Orchestrates an accepted submission: re-validate, stamp identity and
/// timestamp, persist, then hand off to the confirmation navigator.
pub struct RegistrationService<S, N> {
    store: Arc<S>,
    navigator: Arc<N>,
    collection: String,
    in_flight: AtomicBool,
    last_issued_millis: AtomicI64,
}

impl<S, N> RegistrationService<S, N>
where
    S: RecordStore + 'static,
    N: ConfirmationNavigator + 'static,
{
    pub fn new(store: Arc<S>, navigator: Arc<N>) -> Self {
        Self::with_collection(store, navigator, VOLUNTEERS_COLLECTION)
    }

    pub fn with_collection(
        store: Arc<S>,
        navigator: Arc<N>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            collection: collection.into(),
            in_flight: AtomicBool::new(false),
            last_issued_millis: AtomicI64::new(0),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Submit the current form snapshot.
    ///
    /// Re-checks eligibility and required fields independently of the UI
    /// gate, so a submission that bypassed the gate never reaches the store.
    /// The caller's form is untouched on every failure path; retry is manual.
    pub fn submit(
        &self,
        form: &RegistrationForm,
        now: DateTime<Utc>,
    ) -> Result<VolunteerRegistration, SubmissionError> {
        let _guard = self.begin()?;

        let today = now.date_naive();
        let Some(date_of_birth) = form.date_of_birth else {
            return Err(SubmissionError::Incomplete(vec![
                RequiredField::DateOfBirth,
            ]));
        };

        let age = age_on(date_of_birth, today);
        if age < MINIMUM_VOLUNTEER_AGE {
            return Err(SubmissionError::Ineligible { age });
        }

        let outstanding = outstanding_requirements(form);
        if !outstanding.is_empty() {
            return Err(SubmissionError::Incomplete(outstanding));
        }

        // The gate guarantees these are present; fall back to Incomplete
        // rather than panic if a caller constructed an inconsistent form.
        let (Some(preferred_role), Some(prior_experience), Some(preferred_location)) = (
            form.preferred_role,
            form.prior_experience,
            form.preferred_location,
        ) else {
            return Err(SubmissionError::Incomplete(vec![
                RequiredField::PreferredRole,
            ]));
        };

        let tshirt_size = {
            let trimmed = form.tshirt_size.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        let record = VolunteerRegistration {
            volunteer_id: self.next_volunteer_id(now),
            full_name: form.full_name.trim().to_string(),
            date_of_birth,
            age,
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            preferred_role,
            prior_experience,
            preferred_location,
            tshirt_size,
            emergency_contact_name: form.emergency_contact_name.trim().to_string(),
            emergency_contact_phone: form.emergency_contact_phone.trim().to_string(),
            available_dates: form.available_dates.iter().copied().collect(),
            agreement_accepted: form.agreement_accepted,
            signature: form.signature.trim().to_string(),
            created_at: now,
        };

        self.store.create_record(&self.collection, &record)?;
        self.navigator.navigate_to(CONFIRMATION_ROUTE, &record);

        Ok(record)
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, SubmissionError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .map_err(|_| SubmissionError::AlreadyInFlight)?;
        Ok(InFlightGuard(&self.in_flight))
    }

    /// Time-based identifier in the `Volunteer-{millis}` shape, bumped past
    /// the last issued value so two submissions from this process can never
    /// share an id even within one millisecond.
    fn next_volunteer_id(&self, now: DateTime<Utc>) -> VolunteerId {
        let mut candidate = now.timestamp_millis();
        let mut last = self.last_issued_millis.load(Ordering::Relaxed);
        loop {
            if candidate <= last {
                candidate = last + 1;
            }
            match self.last_issued_millis.compare_exchange(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => last = observed,
            }
        }
        VolunteerId(format!("Volunteer-{candidate}"))
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Error raised by the submission workflow.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("a submission is already in flight")]
    AlreadyInFlight,
    #[error("{}", UNDERAGE_MESSAGE)]
    Ineligible { age: i32 },
    #[error("registration is missing required fields: {0:?}")]
    Incomplete(Vec<RequiredField>),
    #[error(transparent)]
    Store(#[from] StoreError),
}
