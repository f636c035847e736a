mod errors;
mod identifiers;
pub mod timestamp;

pub use identifiers::{MerchantId, TerminalId};
