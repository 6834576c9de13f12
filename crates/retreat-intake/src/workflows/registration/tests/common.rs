use std::sync::{mpsc, Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Months, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::registration::domain::{
    EventLocation, PriorExperience, VolunteerRegistration, VolunteerRole,
};
use crate::workflows::registration::form::RegistrationForm;
use crate::workflows::registration::store::{
    ConfirmationNavigator, RecordId, RecordStore, StoreError,
};
use crate::workflows::registration::{registration_router, RegistrationService};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2025, 12, 1)
}

pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// A form with every required field filled and an eligible birth date.
pub(super) fn filled_form() -> RegistrationForm {
    let form = RegistrationForm {
        full_name: "MARIA THOMAS".to_string(),
        date_of_birth: Some(date(2005, 6, 15)),
        email: "maria.thomas@example.com".to_string(),
        phone: "0501234567".to_string(),
        preferred_role: Some(VolunteerRole::WelcomeDesk),
        prior_experience: Some(PriorExperience::Yes),
        preferred_location: Some(EventLocation::RegistrationDesk),
        tshirt_size: "M".to_string(),
        emergency_contact_name: "ANNA THOMAS".to_string(),
        emergency_contact_phone: "0507654321".to_string(),
        agreement_accepted: true,
        signature: "Maria Thomas".to_string(),
        ..RegistrationForm::default()
    };
    let form = form.toggle_available_date(date(2025, 12, 28));
    form.toggle_available_date(date(2025, 12, 29))
        .with_recomputed_age(today())
}

/// Same form, but the volunteer is ten years old on the reference date.
pub(super) fn underage_form() -> RegistrationForm {
    let mut form = filled_form();
    form.date_of_birth = Some(date(2015, 12, 1));
    form.with_recomputed_age(today())
}

/// Ten years old relative to the real clock, for handlers that stamp
/// `Utc::now()` themselves; stays underage as the calendar advances.
pub(super) fn underage_form_now() -> RegistrationForm {
    let today = Utc::now().date_naive();
    let mut form = filled_form();
    form.date_of_birth = Some(today - Months::new(120));
    form.with_recomputed_age(today)
}

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<Vec<(String, VolunteerRegistration)>>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<(String, VolunteerRegistration)> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl RecordStore for MemoryStore {
    fn create_record(
        &self,
        collection: &str,
        record: &VolunteerRegistration,
    ) -> Result<RecordId, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.push((collection.to_string(), record.clone()));
        Ok(RecordId(record.volunteer_id.0.clone()))
    }
}

#[derive(Default)]
pub(super) struct RecordingNavigator {
    visits: Mutex<Vec<(String, VolunteerRegistration)>>,
}

impl RecordingNavigator {
    pub(super) fn visits(&self) -> Vec<(String, VolunteerRegistration)> {
        self.visits.lock().expect("navigator mutex poisoned").clone()
    }
}

impl ConfirmationNavigator for RecordingNavigator {
    fn navigate_to(&self, route: &str, registration: &VolunteerRegistration) {
        self.visits
            .lock()
            .expect("navigator mutex poisoned")
            .push((route.to_string(), registration.clone()));
    }
}

pub(super) struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn create_record(
        &self,
        _collection: &str,
        _record: &VolunteerRegistration,
    ) -> Result<RecordId, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

/// Parks the first write on a channel so a test can hold a submission in
/// flight while it exercises the service from another thread.
pub(super) struct BlockingStore {
    entered: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl BlockingStore {
    pub(super) fn new(entered: mpsc::Sender<()>, release: mpsc::Receiver<()>) -> Self {
        Self {
            entered: Mutex::new(entered),
            release: Mutex::new(release),
        }
    }
}

impl RecordStore for BlockingStore {
    fn create_record(
        &self,
        _collection: &str,
        record: &VolunteerRegistration,
    ) -> Result<RecordId, StoreError> {
        self.entered
            .lock()
            .expect("entered mutex poisoned")
            .send(())
            .ok();
        self.release
            .lock()
            .expect("release mutex poisoned")
            .recv()
            .ok();
        Ok(RecordId(record.volunteer_id.0.clone()))
    }
}

pub(super) struct RejectingStore;

impl RecordStore for RejectingStore {
    fn create_record(
        &self,
        _collection: &str,
        _record: &VolunteerRegistration,
    ) -> Result<RecordId, StoreError> {
        Err(StoreError::Rejected("write denied".to_string()))
    }
}

pub(super) fn build_service() -> (
    RegistrationService<MemoryStore, RecordingNavigator>,
    Arc<MemoryStore>,
    Arc<RecordingNavigator>,
) {
    let store = Arc::new(MemoryStore::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let service = RegistrationService::new(store.clone(), navigator.clone());
    (service, store, navigator)
}

pub(super) fn registration_router_with_service(
    service: RegistrationService<MemoryStore, RecordingNavigator>,
) -> axum::Router {
    registration_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
