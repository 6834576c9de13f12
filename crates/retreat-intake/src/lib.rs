//! Volunteer registration workflows for retreat event intake.
//!
//! The crate is organized around the `workflows::registration` module, which
//! owns the form state, eligibility rules, submission gate, and the service
//! that persists accepted registrations through an injected record store.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
