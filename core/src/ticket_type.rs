use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::Amount;
use crate::error::TicketRequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    // An adult ticket is the only ticket type that can be bought on its own.
    // Every purchase with child or infant tickets needs at least one adult ticket.
    Adult,

    // A child ticket costs half of the adult price and takes a seat.
    Child,

    // Infants do not pay for a ticket and are not allocated a seat.
    // They will be sitting on an adult's lap.
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Unit price of a single ticket
    pub fn price(&self) -> Amount {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }

    pub fn consumes_seat(&self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl Display for TicketType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = TicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TicketType::ALL.into_iter()
            .find(|it| it.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TicketRequestError::UnknownTicketType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TicketRequestError;
    use crate::ticket_type::TicketType;
    use crate::ticket_type::TicketType::{Adult, Child, Infant};

    #[test]
    fn prices() {
        assert_eq!(Adult.price(), 20);
        assert_eq!(Child.price(), 10);
        assert_eq!(Infant.price(), 0);
    }

    #[test]
    fn infant_has_no_seat() {
        assert!(Adult.consumes_seat());
        assert!(Child.consumes_seat());
        assert!(!Infant.consumes_seat());
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!("ADULT".parse::<TicketType>().unwrap(), Adult);
        assert_eq!(" child ".parse::<TicketType>().unwrap(), Child);
        assert_eq!("Infant".parse::<TicketType>().unwrap(), Infant);
    }

    #[test]
    fn parse_unknown() {
        let result = "SENIOR".parse::<TicketType>();
        assert!(matches!(result, Err(TicketRequestError::UnknownTicketType(name)) if name == "SENIOR"));
    }
}
