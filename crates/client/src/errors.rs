use appointly_core::SchedulingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Rejected(#[from] SchedulingError),

    #[error("Store error: {0}")]
    Store(#[from] eyre::Report),
}

impl BookingError {
    /// The scheduling rule that failed, if this was a validation rejection.
    pub fn scheduling_error(&self) -> Option<&SchedulingError> {
        match self {
            BookingError::Rejected(err) => Some(err),
            BookingError::Store(_) => None,
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
