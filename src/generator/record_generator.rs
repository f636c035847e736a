use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::clock::Clock;
use crate::models::{TransactionRecord, TransactionStatus, TransactionType};
use crate::types::{MerchantId, TerminalId};

pub const TIMESTAMP_WINDOW_DAYS: i64 = 30;
const TIMESTAMP_WINDOW_MICROS: i64 = TIMESTAMP_WINDOW_DAYS * 24 * 60 * 60 * 1_000_000;

const AMOUNT_DECIMAL_PLACES: u32 = 2;
const MIN_AMOUNT_CENTS: i64 = 1_000;
const MAX_AMOUNT_CENTS: i64 = 500_000;

/// Produces independent, identically distributed transaction records.
pub struct RecordGenerator<C: Clock> {
    clock: C
}

impl<C: Clock> RecordGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock
        }
    }

    /// Generates one complete record with every field present.
    ///
    /// The timestamp is drawn uniformly, to the microsecond, from the
    /// `TIMESTAMP_WINDOW_DAYS` days leading up to the clock's current time.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> TransactionRecord {
        TransactionRecord {
            merchant_id: MerchantId::random(rng),
            terminal_id: TerminalId::random(rng),
            timestamp: Some(self.random_timestamp(rng)),
            transaction_type: TransactionType::ALL[rng.gen_range(0..TransactionType::ALL.len())],
            amount: Some(random_amount(rng)),
            status: Some(TransactionStatus::ALL[rng.gen_range(0..TransactionStatus::ALL.len())])
        }
    }

    fn random_timestamp<R: Rng>(&self, rng: &mut R) -> DateTime<Utc> {
        let now = self.clock.now().trunc_subsecs(6);
        let offset = rng.gen_range(0..=TIMESTAMP_WINDOW_MICROS);

        now - TimeDelta::microseconds(offset)
    }
}

fn random_amount<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS), AMOUNT_DECIMAL_PLACES)
}
