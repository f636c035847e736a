mod injector;

pub use injector::NoiseInjector;

/// Number of records each noise step touched.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct NoiseReport {
    pub missing: usize,
    pub duplicated: usize,
    pub displaced: usize
}

/// `floor(len * fraction)`, capped at `len`.
pub fn fraction_of(len: usize, fraction: f64) -> usize {
    ((len as f64 * fraction).floor() as usize).min(len)
}
