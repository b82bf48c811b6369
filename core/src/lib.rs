//! Core library for validating and pricing cinema ticket purchases.
//! A purchase is accepted or rejected by a TicketService implementation. An accepted purchase
//! charges the account through TicketPaymentService and reserves seats through SeatReservationService.

use crate::error::PurchaseError;
use crate::purchase::Purchase;
use crate::service::basic_ticket_service::BasicTicketService;
use crate::thirdparty::payment::TicketPaymentMemoryService;
use crate::thirdparty::seat_booking::SeatReservationMemoryService;
use crate::ticket_type_request::TicketTypeRequest;

pub mod error;
pub mod pricing;
pub mod purchase;
pub mod service;
pub mod thirdparty;
pub mod ticket_type;
pub mod ticket_type_request;

/// Account id as given by the caller, only values > 0 are valid
pub type AccountId = i64;
pub type Amount = u64;
pub type SeatCount = u32;

/// Summed quantity of all ticket requests in a single purchase
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

pub type MemoryTicketService = BasicTicketService<TicketPaymentMemoryService, SeatReservationMemoryService>;

/// Ticket service trait is abstraction about purchase of tickets.
/// A rejected purchase must not call the payment or the seat reservation service.
pub trait TicketService {
    fn purchase_tickets(&mut self, account_id: AccountId, requests: &[TicketTypeRequest]) -> Result<Purchase, PurchaseError>;
}
