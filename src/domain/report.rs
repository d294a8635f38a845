use num_bigint::BigUint;
use std::fmt;

/// Fixed second line of every report.
pub const MARKER: &str = "1";

/// The result of one computation.
///
/// Renders as two lines: the decimal total, then `MARKER`. No trailing
/// newline is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: BigUint,
}

impl Report {
    pub fn new(total: BigUint) -> Self {
        Self { total }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.total, MARKER)
    }
}
