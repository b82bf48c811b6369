use std::io::Write;
use cinema_core::purchase::Purchase;
use cinema_core::thirdparty::payment::TicketPaymentMemoryService;
use cinema_core::thirdparty::seat_booking::SeatReservationMemoryService;
use crate::CliError;

pub fn write(purchase: Purchase, payments: TicketPaymentMemoryService, seats: SeatReservationMemoryService) -> Result<(), CliError> {
    //we can easy change writer to other types
    let stdout = std::io::stdout();
    write_report(stdout.lock(), purchase, payments, seats)
}

/// Three csv sections separated by an empty line:
/// purchase summary, payments per account, seats per account
pub fn write_report<W>(mut writer: W, purchase: Purchase, payments: TicketPaymentMemoryService, seats: SeatReservationMemoryService) -> Result<(), CliError>
    where W: Write
{
    write_csv(&mut writer, std::iter::once(purchase))?;
    writeln!(writer)?;
    write_csv(&mut writer, payments.into_iter())?;
    writeln!(writer)?;
    write_csv(&mut writer, seats.into_iter())?;

    Ok(())
}

pub fn write_csv<W, T>(writer: W, iter: impl Iterator<Item=T>) -> Result<(), csv::Error>
    where
        W: Write,
        T: serde::Serialize,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for record in iter {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
