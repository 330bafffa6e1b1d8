//! Patients module: the clinic's in-memory patient records.
//!
//! # Resources
//!
//! - **Patient**: one registered patient, id `P0001`, `P0002`, ...
//! - **PatientForm**: the raw text of the add/edit dialog
//! - **PatientRegistry**: ordered collection with create/update/delete
//!   and case-insensitive name search
//!
//! Records are never persisted; a registry lives as long as the session
//! that owns it.

pub mod model;
pub mod service;

pub use model::{Patient, PatientDraft, PatientField, PatientForm, PatientId, parse_age};
pub use service::{Matches, PatientError, PatientRegistry};
