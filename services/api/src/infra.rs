use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

use retreat_intake::workflows::registration::{
    ConfirmationNavigator, RecordId, RecordStore, StoreError, VolunteerRegistration,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local document store keyed by collection name. Stands in for the
/// managed cloud store in development and tests.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRecordStore {
    collections: Arc<Mutex<HashMap<String, Vec<VolunteerRegistration>>>>,
}

impl InMemoryRecordStore {
    #[cfg(test)]
    pub(crate) fn stored(&self, collection: &str) -> Vec<VolunteerRegistration> {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn create_record(
        &self,
        collection: &str,
        record: &VolunteerRegistration,
    ) -> Result<RecordId, StoreError> {
        let mut guard = self.collections.lock().map_err(|_| {
            StoreError::Unavailable("store mutex poisoned".to_string())
        })?;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        Ok(RecordId(record.volunteer_id.0.clone()))
    }
}

/// Confirmation hand-off adapter: the HTTP client performs the actual route
/// transition, so the server side just records the event in the logs.
#[derive(Default, Clone)]
pub(crate) struct LoggingNavigator;

impl ConfirmationNavigator for LoggingNavigator {
    fn navigate_to(&self, route: &str, registration: &VolunteerRegistration) {
        info!(
            volunteer_id = %registration.volunteer_id.0,
            %route,
            "registration confirmed"
        );
    }
}
