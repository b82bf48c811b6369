use serde::Deserialize;
use crate::error::TicketRequestError;
use crate::ticket_type::TicketType;

/// Immutable request for `quantity` tickets of a single type.
/// A value of this type is always well formed, untyped input goes through `TicketTypeRequest::parse`
/// or `TryFrom<TicketTypeRequestRow>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: u32,
}

impl TicketTypeRequest {
    pub fn new(ticket_type: TicketType, quantity: u32) -> Self {
        TicketTypeRequest {
            ticket_type,
            quantity,
        }
    }

    /// Build a request from a ticket type name and a raw quantity.
    /// Fails fast on unknown type names and on quantities that don't fit in u32.
    pub fn parse(ticket_type: &str, quantity: i64) -> Result<Self, TicketRequestError> {
        let ticket_type = ticket_type.parse::<TicketType>()?;

        if quantity < 0 {
            return Err(TicketRequestError::NegativeQuantity(quantity));
        }

        let quantity = u32::try_from(quantity).map_err(|_| TicketRequestError::QuantityOverflow(quantity))?;

        Ok(TicketTypeRequest::new(ticket_type, quantity))
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Untyped ticket request as read from csv: `type,quantity`
#[derive(Debug, Clone, Deserialize)]
pub struct TicketTypeRequestRow {
    r#type: String,
    quantity: String,
}

impl TicketTypeRequestRow {
    pub fn new<T, Q>(r#type: T, quantity: Q) -> Self
        where T: ToString,
              Q: ToString
    {
        TicketTypeRequestRow {
            r#type: r#type.to_string(),
            quantity: quantity.to_string(),
        }
    }
}

impl TryFrom<TicketTypeRequestRow> for TicketTypeRequest {
    type Error = TicketRequestError;

    fn try_from(row: TicketTypeRequestRow) -> Result<Self, Self::Error> {
        let quantity = row.quantity.trim().parse::<i64>()
            .map_err(|_| TicketRequestError::InvalidQuantity(row.quantity.clone()))?;

        TicketTypeRequest::parse(&row.r#type, quantity)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TicketRequestError;
    use crate::ticket_type::TicketType::{Adult, Infant};
    use crate::ticket_type_request::{TicketTypeRequest, TicketTypeRequestRow};

    #[test]
    fn parse_valid() {
        let request = TicketTypeRequest::parse("ADULT", 2).unwrap();
        assert_eq!(request.ticket_type(), Adult);
        assert_eq!(request.quantity(), 2);
    }

    #[test]
    fn parse_zero_quantity_is_well_formed() {
        // quantity rules per type are checked at purchase time, not here
        let request = TicketTypeRequest::parse("INFANT", 0).unwrap();
        assert_eq!(request, TicketTypeRequest::new(Infant, 0));
    }

    #[test]
    fn parse_negative_quantity() {
        assert_eq!(TicketTypeRequest::parse("ADULT", -1), Err(TicketRequestError::NegativeQuantity(-1)));
    }

    #[test]
    fn parse_huge_quantity() {
        let quantity = i64::from(u32::MAX) + 1;
        assert_eq!(TicketTypeRequest::parse("CHILD", quantity), Err(TicketRequestError::QuantityOverflow(quantity)));
    }

    #[test]
    fn parse_unknown_type() {
        assert!(matches!(TicketTypeRequest::parse("STUDENT", 1), Err(TicketRequestError::UnknownTicketType(_))));
    }

    #[test]
    fn row_with_fraction_quantity() {
        let row = TicketTypeRequestRow::new("ADULT", "1.5");
        assert_eq!(TicketTypeRequest::try_from(row), Err(TicketRequestError::InvalidQuantity("1.5".into())));
    }

    #[test]
    fn row_valid() {
        let row = TicketTypeRequestRow::new("adult", " 3 ");
        assert_eq!(TicketTypeRequest::try_from(row), Ok(TicketTypeRequest::new(Adult, 3)));
    }
}
