use nohash_hasher::{BuildNoHashHasher, IntMap};
use serde::Serialize;
use tracing::debug;
use crate::{AccountId, Amount};
use crate::thirdparty::TicketPaymentService;

/// Total amount charged to a single account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountPayment {
    account: AccountId,
    amount: Amount,
}

impl AccountPayment {
    pub fn account(&self) -> AccountId {
        self.account
    }
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// In memory payment gateway.
/// Keeps every charge in call order and a running total per account.
/// This repository is using HashMap/BuildNoHashHasher as hash implementation
#[derive(Debug, Default)]
pub struct TicketPaymentMemoryService {
    charges: Vec<(AccountId, Amount)>,
    totals: IntMap<AccountId, Amount>,
}

impl TicketPaymentMemoryService {
    pub fn new() -> Self {
        TicketPaymentMemoryService {
            charges: Vec::new(),
            totals: IntMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TicketPaymentMemoryService {
            charges: Vec::with_capacity(capacity),
            totals: IntMap::with_capacity_and_hasher(capacity, BuildNoHashHasher::default()),
        }
    }

    /// Every `make_payment` call in the order it was made
    pub fn charges(&self) -> &[(AccountId, Amount)] {
        &self.charges
    }

    pub fn find_by_account(&self, account_id: AccountId) -> Option<Amount> {
        self.totals.get(&account_id).copied()
    }

    pub fn get_all_payment_iter(&self) -> impl Iterator<Item=AccountPayment> + '_ {
        self.totals.iter().map(|(account, amount)| AccountPayment { account: *account, amount: *amount })
    }
}

impl TicketPaymentService for TicketPaymentMemoryService {
    fn make_payment(&mut self, account_id: AccountId, amount: Amount) {
        debug!(account_id, amount, "charging account");

        self.charges.push((account_id, amount));
        let total = self.totals.entry(account_id).or_default();
        *total = total.saturating_add(amount);
    }
}

impl IntoIterator for TicketPaymentMemoryService {
    type Item = AccountPayment;
    type IntoIter = Box<dyn Iterator<Item=Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.totals.into_iter().map(|(account, amount)| AccountPayment { account, amount }))
    }
}
