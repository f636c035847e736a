use crate::types::errors::IdentifierError;
use rand::Rng;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

const MERCHANT_PREFIX: char = 'M';
const MERCHANT_DIGITS: usize = 4;
const TERMINAL_PREFIX: char = 'T';
const TERMINAL_DIGITS: usize = 3;

/// Merchant identifier rendered as `M` followed by four digits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MerchantId(u16);

/// Terminal identifier rendered as `T` followed by three digits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TerminalId(u16);

impl MerchantId {
    pub const RANGE: RangeInclusive<u16> = 1000..=9999;

    pub fn new(value: u16) -> Result<Self, IdentifierError> {
        check_range(value, &Self::RANGE).map(MerchantId)
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        MerchantId(rng.gen_range(Self::RANGE))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl TerminalId {
    pub const RANGE: RangeInclusive<u16> = 100..=999;

    pub fn new(value: u16) -> Result<Self, IdentifierError> {
        check_range(value, &Self::RANGE).map(TerminalId)
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        TerminalId(rng.gen_range(Self::RANGE))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

fn check_range(value: u16, range: &RangeInclusive<u16>) -> Result<u16, IdentifierError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(IdentifierError::OutOfRange {
            value,
            min: *range.start(),
            max: *range.end()
        })
    }
}

fn parse_prefixed(value: &str, prefix: char, digits: usize) -> Result<u16, IdentifierError> {
    let value = value.trim();

    let Some(number) = value.strip_prefix(prefix) else {
        return Err(IdentifierError::InvalidFormat(format!("'{value}' does not start with '{prefix}'")));
    };

    if number.len() != digits || !number.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(IdentifierError::InvalidFormat(format!("'{value}' must have exactly {digits} digits after '{prefix}'")));
    }

    Ok(number.parse()?)
}

impl Display for MerchantId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{:0width$}", MERCHANT_PREFIX, self.value(), width = MERCHANT_DIGITS)
    }
}

impl Display for TerminalId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{:0width$}", TERMINAL_PREFIX, self.value(), width = TERMINAL_DIGITS)
    }
}

impl FromStr for MerchantId {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        MerchantId::new(parse_prefixed(value, MERCHANT_PREFIX, MERCHANT_DIGITS)?)
    }
}

impl FromStr for TerminalId {
    type Err = IdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TerminalId::new(parse_prefixed(value, TERMINAL_PREFIX, TERMINAL_DIGITS)?)
    }
}

impl Serialize for MerchantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for TerminalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MerchantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        MerchantId::from_str(&value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for TerminalId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        TerminalId::from_str(&value).map_err(de::Error::custom)
    }
}
