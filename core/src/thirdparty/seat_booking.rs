use nohash_hasher::IntMap;
use serde::Serialize;
use tracing::debug;
use crate::{AccountId, SeatCount};
use crate::thirdparty::SeatReservationService;

/// Total number of seats reserved by a single account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountSeats {
    account: AccountId,
    seats: u64,
}

impl AccountSeats {
    pub fn account(&self) -> AccountId {
        self.account
    }
    pub fn seats(&self) -> u64 {
        self.seats
    }
}

/// In memory seat booking.
/// Keeps every reservation in call order and a running seat count per account.
#[derive(Debug, Default)]
pub struct SeatReservationMemoryService {
    reservations: Vec<(AccountId, SeatCount)>,
    seats: IntMap<AccountId, u64>,
}

impl SeatReservationMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservations(&self) -> &[(AccountId, SeatCount)] {
        &self.reservations
    }

    pub fn find_by_account(&self, account_id: AccountId) -> Option<u64> {
        self.seats.get(&account_id).copied()
    }

    pub fn get_all_seats_iter(&self) -> impl Iterator<Item=AccountSeats> + '_ {
        self.seats.iter().map(|(account, seats)| AccountSeats { account: *account, seats: *seats })
    }
}

impl SeatReservationService for SeatReservationMemoryService {
    fn reserve_seat(&mut self, account_id: AccountId, seats: SeatCount) {
        debug!(account_id, seats, "reserving seats");

        self.reservations.push((account_id, seats));
        *self.seats.entry(account_id).or_default() += u64::from(seats);
    }
}

impl IntoIterator for SeatReservationMemoryService {
    type Item = AccountSeats;
    type IntoIter = Box<dyn Iterator<Item=Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.seats.into_iter().map(|(account, seats)| AccountSeats { account, seats }))
    }
}
