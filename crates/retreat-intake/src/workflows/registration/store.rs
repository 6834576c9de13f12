use serde::{Deserialize, Serialize};

use super::domain::VolunteerRegistration;

/// Default collection accepted registrations are written into.
pub const VOLUNTEERS_COLLECTION: &str = "volunteers";

/// Route the confirmation view lives under.
pub const CONFIRMATION_ROUTE: &str = "/volunteer-id";

/// Identifier assigned by the record store for a persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Persistence abstraction so the submission workflow can be exercised
/// without a live document store.
pub trait RecordStore: Send + Sync {
    fn create_record(
        &self,
        collection: &str,
        record: &VolunteerRegistration,
    ) -> Result<RecordId, StoreError>;
}

/// Error enumeration for record store failures. Both variants are recoverable
/// by a user-initiated retry; nothing is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record rejected by store: {0}")]
    Rejected(String),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Outbound navigation hook invoked after a successful write. Fire-and-forget:
/// no return value is consumed.
pub trait ConfirmationNavigator: Send + Sync {
    fn navigate_to(&self, route: &str, registration: &VolunteerRegistration);
}
