use crate::{Amount, SeatCount};
use crate::ticket_type_request::TicketTypeRequest;

/// Amount to pay and seats to reserve for a single purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingResult {
    amount: Amount,
    seats: SeatCount,
}

impl PricingResult {
    pub fn amount(&self) -> Amount {
        self.amount
    }
    pub fn seats(&self) -> SeatCount {
        self.seats
    }
}

/// Total quantity across all requests, infants included.
pub fn total_tickets(requests: &[TicketTypeRequest]) -> u64 {
    requests.iter().map(|it| u64::from(it.quantity())).sum()
}

/// Price the requests. Infants pay nothing and take no seat.
/// Callers check the ticket limit first, so seat count fits in SeatCount.
pub fn price(requests: &[TicketTypeRequest]) -> PricingResult {
    requests.iter().fold(PricingResult::default(), |mut result, request| {
        let ticket_type = request.ticket_type();
        let quantity = request.quantity();

        result.amount += Amount::from(quantity) * ticket_type.price();
        if ticket_type.consumes_seat() {
            result.seats += quantity;
        }
        result
    })
}

#[cfg(test)]
mod tests {
    use crate::pricing::{price, total_tickets};
    use crate::ticket_type::TicketType::{Adult, Child, Infant};
    use crate::ticket_type_request::TicketTypeRequest;

    #[test]
    fn adults_and_children() {
        let requests = [TicketTypeRequest::new(Adult, 2), TicketTypeRequest::new(Child, 3)];
        let result = price(&requests);

        assert_eq!(result.amount(), 70);
        assert_eq!(result.seats(), 5);
    }

    #[test]
    fn infants_are_free_and_seatless() {
        let requests = [TicketTypeRequest::new(Adult, 1), TicketTypeRequest::new(Infant, 4)];
        let result = price(&requests);

        assert_eq!(result.amount(), 20);
        assert_eq!(result.seats(), 1);
        assert_eq!(total_tickets(&requests), 5);
    }

    #[test]
    fn nothing_requested() {
        let result = price(&[]);
        assert_eq!(result.amount(), 0);
        assert_eq!(result.seats(), 0);
    }
}
