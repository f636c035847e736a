#[cfg(test)]
mod tests;
mod transaction;

use serde::{Deserialize, Serialize};

pub use transaction::TransactionRecord;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Payment,
    Withdrawal,
    Transfer
}

impl TransactionType {
    pub const ALL: [TransactionType; 3] = [TransactionType::Payment, TransactionType::Withdrawal, TransactionType::Transfer];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Successful,
    Failed
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 2] = [TransactionStatus::Successful, TransactionStatus::Failed];
}

/// The fields the noise injector is allowed to blank out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum NoisyField {
    Amount,
    Status,
    Timestamp
}

impl NoisyField {
    pub const ALL: [NoisyField; 3] = [NoisyField::Amount, NoisyField::Status, NoisyField::Timestamp];
}
