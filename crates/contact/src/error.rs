use crate::{DeliveryError, ValidationError};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Delivery(#[from] DeliveryError),

    #[error("a submission is already in flight")]
    InFlight,
}

pub type Result<T> = std::result::Result<T, Error>;
