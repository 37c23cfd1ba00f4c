//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated record invariants.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("control {control_id} is missing required field '{field}'")]
    MissingField {
        field: &'static str,
        control_id: String,
    },
}
