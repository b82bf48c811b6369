use thiserror::Error;
use crate::AccountId;
use crate::ticket_type::TicketType;

/// Rejection of a whole purchase. Raised before any payment or seat reservation is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    // Can't purchase: account id must be greater than zero
    #[error("Invalid account id {0}, expected a value greater than zero")]
    InvalidAccount(AccountId),

    // Can't purchase: summed quantity of all requests is above the limit
    #[error("Maximum of {max} tickets can be purchased at a time, requested {requested}")]
    MaximumExceeded { requested: u64, max: u64 },

    // Can't purchase: one of the ticket requests could not be built
    #[error("Invalid ticket purchase request: {0}")]
    InvalidRequest(String),

    // Can't purchase: quantity not allowed for the ticket type
    #[error("Invalid quantity {quantity} for {ticket_type} ticket")]
    InvalidQuantity { ticket_type: TicketType, quantity: u32 },

    // Can't purchase: child and infant tickets need an adult ticket in the same purchase
    #[error("Child and infant tickets cannot be purchased without an adult ticket")]
    AdultRequired,

    // Can't purchase: ticket type is not one of ADULT, CHILD or INFANT
    #[error("Invalid ticket type {0}")]
    UnknownTicketType(String),
}

/// Error raised while building a single ticket request from untyped input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketRequestError {
    #[error("unknown ticket type {0:?}")]
    UnknownTicketType(String),

    #[error("ticket quantity {0:?} is not an integer")]
    InvalidQuantity(String),

    #[error("ticket quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    #[error("ticket quantity {0} is too large")]
    QuantityOverflow(i64),
}

impl From<TicketRequestError> for PurchaseError {
    fn from(e: TicketRequestError) -> Self {
        match e {
            TicketRequestError::UnknownTicketType(name) => PurchaseError::UnknownTicketType(name),
            other => PurchaseError::InvalidRequest(other.to_string()),
        }
    }
}
