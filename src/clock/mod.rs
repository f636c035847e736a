#[cfg(test)]
mod fixed_clock;
mod system_clock;

use chrono::{DateTime, Utc};

#[cfg(test)]
pub use fixed_clock::FixedClock;
pub use system_clock::SystemClock;

/// Source of the current time for record generation.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
