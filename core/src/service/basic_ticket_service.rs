use tracing::{debug, info, warn};
use crate::{AccountId, MAX_TICKETS_PER_PURCHASE, TicketService};
use crate::error::PurchaseError;
use crate::error::PurchaseError::{AdultRequired, InvalidAccount, InvalidQuantity, MaximumExceeded};
use crate::pricing::{price, total_tickets};
use crate::purchase::Purchase;
use crate::thirdparty::{SeatReservationService, TicketPaymentService};
use crate::ticket_type::TicketType::{Adult, Child, Infant};
use crate::ticket_type_request::TicketTypeRequest;

/// Validates a purchase, prices it, then charges the account and reserves the seats.
/// Both services are given once at construction and never replaced.
pub struct BasicTicketService<P, S> {
    // payment gateway, charged first
    payment_service: P,

    // seat booking, called only after the payment
    seat_service: S,
}

impl<P, S> BasicTicketService<P, S>
    where P: TicketPaymentService,
          S: SeatReservationService
{
    pub fn new(payment_service: P, seat_service: S) -> Self {
        BasicTicketService {
            payment_service,
            seat_service,
        }
    }

    pub fn payment_service(&self) -> &P {
        &self.payment_service
    }

    pub fn seat_service(&self) -> &S {
        &self.seat_service
    }

    pub fn into_parts(self) -> (P, S) {
        (self.payment_service, self.seat_service)
    }

    /// Every check runs before any side effect, the first failing one wins.
    fn validate(account_id: AccountId, requests: &[TicketTypeRequest]) -> Result<(), PurchaseError> {
        if account_id <= 0 {
            return Err(InvalidAccount(account_id));
        }

        let requested = total_tickets(requests);
        if requested > MAX_TICKETS_PER_PURCHASE {
            return Err(MaximumExceeded { requested, max: MAX_TICKETS_PER_PURCHASE });
        }

        for request in requests {
            Self::validate_quantity(request)?;
        }

        Self::validate_adult_present(requests)
    }

    fn validate_quantity(request: &TicketTypeRequest) -> Result<(), PurchaseError> {
        let valid = match request.ticket_type() {
            Infant => request.quantity() == 0,
            Child | Adult => request.quantity() > 0,
        };

        if !valid {
            return Err(InvalidQuantity { ticket_type: request.ticket_type(), quantity: request.quantity() });
        }

        Ok(())
    }

    /// Child and infant tickets only with at least one adult ticket,
    /// zero quantity child/infant requests count too.
    fn validate_adult_present(requests: &[TicketTypeRequest]) -> Result<(), PurchaseError> {
        let minor = requests.iter().any(|it| matches!(it.ticket_type(), Child | Infant));
        let adult = requests.iter().any(|it| it.ticket_type() == Adult && it.quantity() > 0);

        if minor && !adult {
            return Err(AdultRequired);
        }

        Ok(())
    }
}

impl<P, S> TicketService for BasicTicketService<P, S>
    where P: TicketPaymentService,
          S: SeatReservationService
{
    fn purchase_tickets(&mut self, account_id: AccountId, requests: &[TicketTypeRequest]) -> Result<Purchase, PurchaseError> {
        if let Err(e) = Self::validate(account_id, requests) {
            warn!(account_id, reason = %e, "purchase rejected");
            return Err(e);
        }

        let pricing = price(requests);
        debug!(account_id, amount = pricing.amount(), seats = pricing.seats(), "purchase priced");

        self.payment_service.make_payment(account_id, pricing.amount());
        self.seat_service.reserve_seat(account_id, pricing.seats());

        info!(account_id, amount = pricing.amount(), seats = pricing.seats(), "purchase completed");

        Ok(Purchase::new(account_id, pricing))
    }
}
