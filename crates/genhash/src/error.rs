use thiserror::Error;

use crate::buffer::CapacityError;

/// Message shown for any failure of the hashing step.
pub const GENERIC_FAILURE: &str = "Error!";

#[derive(Debug, Error)]
pub enum GenhashError {
    #[error("expected a password and a salt, got {given} argument(s)")]
    Usage { program: String, given: usize },
    #[error("descriptor does not fit: {0}")]
    Descriptor(#[from] CapacityError),
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl GenhashError {
    /// The single line printed to stdout for this failure.
    pub fn user_message(&self) -> String {
        match self {
            GenhashError::Usage { program, .. } => crate::cli::usage(program),
            GenhashError::Descriptor(_) | GenhashError::Hashing(_) => GENERIC_FAILURE.to_owned(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            GenhashError::Usage { .. } => 2,
            GenhashError::Descriptor(_) | GenhashError::Hashing(_) => 1,
        }
    }
}
