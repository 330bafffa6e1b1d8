mod registry;

pub use registry::{Matches, PatientRegistry};

use thiserror::Error;

use clinic_core::ClinicError;

use crate::model::PatientId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatientError {
    #[error("patient {0} not found")]
    NotFound(PatientId),
}

impl From<PatientError> for ClinicError {
    fn from(e: PatientError) -> Self {
        match e {
            PatientError::NotFound(_) => ClinicError::NotFound(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_clinic_error() {
        let err: ClinicError = PatientError::NotFound(PatientId::from_seq(9)).into();
        assert!(matches!(err, ClinicError::NotFound(ref m) if m == "patient P0009 not found"));
        assert_eq!(err.error_code(), clinic_core::error::error_code::NOT_FOUND);
    }
}
