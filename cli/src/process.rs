use clap::ArgMatches;
use tracing::debug;
use crate::{CliError, ErrorType};
use cinema_core::{AccountId, MemoryTicketService, TicketService};
use cinema_core::error::PurchaseError;
use cinema_core::purchase::Purchase;
use cinema_core::thirdparty::payment::TicketPaymentMemoryService;
use cinema_core::thirdparty::seat_booking::SeatReservationMemoryService;
use cinema_core::ticket_type_request::{TicketTypeRequest, TicketTypeRequestRow};
use crate::reader::read_from_file;
use crate::write::write;

pub fn execute(matches: &ArgMatches) -> Result<(), CliError> {
    let file_path = matches.value_of("file_path").ok_or_else(|| {
        // this should not happen at this stage
        CliError::new(ErrorType::CliParseError, "Arg file path not found")
    })?;

    let account_id = matches.value_of("account")
        .ok_or_else(|| CliError::new(ErrorType::CliParseError, "Arg account not found"))?
        .parse::<AccountId>()
        .map_err(|e| CliError::new(ErrorType::CliParseError, format!("Invalid account id: {}", e)))?;

    // read file, deserialize csv via serde and return iterator
    let rows = read_from_file(file_path)?;

    // in memory services, real gateways can be plugged in via the core traits
    let service = MemoryTicketService::new(TicketPaymentMemoryService::new(), SeatReservationMemoryService::new());
    let (purchase, service) = process(account_id, rows, service)?;

    let (payments, seats) = service.into_parts();
    write(purchase, payments, seats)?;

    Ok(())
}

/// Collect all rows into ticket requests, then purchase them as a single batch.
/// A row that is not a valid ticket request rejects the whole purchase.
pub fn process<I, T>(account_id: AccountId, iter: I, service: T) -> Result<(Purchase, T), CliError>
    where I: Iterator<Item=Result<TicketTypeRequestRow, csv::Error>>,
          T: TicketService
{
    let mut service = service;
    let mut requests = Vec::new();

    for record in iter {

        //check if record contains error
        //if yes - abort
        let row = record?;

        let request = TicketTypeRequest::try_from(row).map_err(PurchaseError::from)?;
        requests.push(request);
    }

    debug!(account_id, requests = requests.len(), "ticket requests read");

    let purchase = service.purchase_tickets(account_id, &requests)?;

    Ok((purchase, service))
}

#[cfg(test)]
mod tests {
    use cinema_core::MemoryTicketService;
    use cinema_core::thirdparty::payment::TicketPaymentMemoryService;
    use cinema_core::thirdparty::seat_booking::SeatReservationMemoryService;
    use crate::ErrorType;
    use crate::process::process;
    use crate::reader::read_from_csv;

    fn service() -> MemoryTicketService {
        MemoryTicketService::new(TicketPaymentMemoryService::new(), SeatReservationMemoryService::new())
    }

    #[test]
    fn adults_and_children() {
        let data = "type,quantity\nADULT,2\nCHILD,3\n";
        let rows = read_from_csv(data.as_bytes()).unwrap();

        let (purchase, service) = process(1, rows, service()).unwrap();
        assert_eq!(purchase.amount(), 70);
        assert_eq!(purchase.seats(), 5);
        assert_eq!(service.payment_service().charges(), &[(1, 70)]);
        assert_eq!(service.seat_service().reservations(), &[(1, 5)]);
    }

    #[test]
    fn unknown_ticket_type() {
        let data = "type,quantity\nADULT,2\nSENIOR,1\n";
        let rows = read_from_csv(data.as_bytes()).unwrap();

        let e = process(1, rows, service()).err().unwrap();
        assert_eq!(e.error_type(), &ErrorType::PurchaseRejected);
        assert_eq!(e.message(), "Invalid ticket type SENIOR");
    }

    #[test]
    fn negative_quantity() {
        let data = "type,quantity\nADULT,-2\n";
        let rows = read_from_csv(data.as_bytes()).unwrap();

        let e = process(1, rows, service()).err().unwrap();
        assert_eq!(e.error_type(), &ErrorType::PurchaseRejected);
        assert!(e.message().starts_with("Invalid ticket purchase request"));
    }

    #[test]
    fn rejected_purchase() {
        let data = "type,quantity\nCHILD,2\n";
        let rows = read_from_csv(data.as_bytes()).unwrap();

        let e = process(1, rows, service()).err().unwrap();
        assert_eq!(e.error_type(), &ErrorType::PurchaseRejected);
    }

    #[test]
    fn broken_csv() {
        let data = "type,quantity\nADULT,1,extra\n";
        let rows = read_from_csv(data.as_bytes()).unwrap();

        let e = process(1, rows, service()).err().unwrap();
        assert_ne!(e.error_type(), &ErrorType::PurchaseRejected);
    }
}
