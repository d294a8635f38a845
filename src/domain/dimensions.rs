use crate::error::{Result, StringCountError};

/// Smallest accepted value for both N and K.
pub const MIN_BOUND: i32 = 1;
/// Largest accepted value for both N and K.
pub const MAX_BOUND: i32 = 100;

/// The validated input pair of the computation.
///
/// `length` is N, the maximum string length, and `alphabet` is K, the number
/// of distinct symbols. Both are guaranteed to lie in `MIN_BOUND..=MAX_BOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    length: u32,
    alphabet: u32,
}

impl Dimensions {
    /// Validates N and K. N is checked before K.
    pub fn new(length: i32, alphabet: i32) -> Result<Self> {
        Ok(Self {
            length: check_bound('N', length)?,
            alphabet: check_bound('K', alphabet)?,
        })
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn alphabet(&self) -> u32 {
        self.alphabet
    }
}

impl TryFrom<(i32, i32)> for Dimensions {
    type Error = StringCountError;

    fn try_from((length, alphabet): (i32, i32)) -> Result<Self> {
        Self::new(length, alphabet)
    }
}

fn check_bound(name: char, value: i32) -> Result<u32> {
    if (MIN_BOUND..=MAX_BOUND).contains(&value) {
        Ok(value.unsigned_abs())
    } else {
        Err(StringCountError::Range { name, value })
    }
}
