use serde::Serialize;
use crate::{AccountId, Amount, SeatCount};
use crate::pricing::PricingResult;

/// Accepted purchase: what was charged and how many seats were reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Purchase {
    account: AccountId,
    amount: Amount,
    seats: SeatCount,
}

impl Purchase {
    pub fn new(account: AccountId, pricing: PricingResult) -> Self {
        Purchase {
            account,
            amount: pricing.amount(),
            seats: pricing.seats(),
        }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }
    pub fn amount(&self) -> Amount {
        self.amount
    }
    pub fn seats(&self) -> SeatCount {
        self.seats
    }
}
