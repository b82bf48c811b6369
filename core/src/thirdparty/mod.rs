//! External services the ticket service depends on.
//! Both services are trusted: a call with a valid account id never fails.

use crate::{AccountId, Amount, SeatCount};

pub mod payment;
pub mod seat_booking;

/// Payment gateway abstraction. Charges `amount` to the given account.
pub trait TicketPaymentService {
    fn make_payment(&mut self, account_id: AccountId, amount: Amount);
}

/// Seat booking abstraction. Reserves `seats` for the given account.
pub trait SeatReservationService {
    fn reserve_seat(&mut self, account_id: AccountId, seats: SeatCount);
}
