use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NoisyField, TransactionStatus, TransactionType};
use crate::types::{timestamp, MerchantId, TerminalId};

/// Represents a single synthetic transaction row.
///
/// Field declaration order is the column order of the written CSV.
/// `timestamp`, `amount` and `status` are optional because the noise injector
/// may blank exactly one of them; `None` is the missing marker and is written
/// as an empty cell.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The merchant the transaction was taken by.
    pub merchant_id: MerchantId,
    /// The terminal the transaction was taken on.
    pub terminal_id: TerminalId,
    /// When the transaction happened, to the second.
    #[serde(with = "timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    /// The kind of operation (payment, withdrawal, transfer).
    pub transaction_type: TransactionType,
    /// The amount moved, scaled to two decimal places.
    pub amount: Option<Decimal>,
    /// Whether the transaction went through.
    pub status: Option<TransactionStatus>
}

impl TransactionRecord {
    /// Column names in output order.
    pub const HEADER: [&'static str; 6] = ["merchant_id", "terminal_id", "timestamp", "transaction_type", "amount", "status"];

    /// Replaces `field` with the missing marker.
    pub fn clear(&mut self, field: NoisyField) {
        match field {
            NoisyField::Amount => self.amount = None,
            NoisyField::Status => self.status = None,
            NoisyField::Timestamp => self.timestamp = None
        }
    }

    /// Lists the noisable fields currently holding the missing marker.
    pub fn missing_fields(&self) -> Vec<NoisyField> {
        NoisyField::ALL
            .into_iter()
            .filter(|field| match field {
                NoisyField::Amount => self.amount.is_none(),
                NoisyField::Status => self.status.is_none(),
                NoisyField::Timestamp => self.timestamp.is_none()
            })
            .collect()
    }

    /// Orders records by timestamp ascending; missing timestamps sort after every real one.
    pub fn cmp_by_timestamp(&self, other: &Self) -> Ordering {
        match (self.timestamp, other.timestamp) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal
        }
    }
}
