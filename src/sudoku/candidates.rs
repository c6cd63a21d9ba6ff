#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A compact set of candidate digits for a single cell.
//!
//! Digits run from `1` up to the board size (at most 25), so a `u32` bitmask
//! is enough: bit `d - 1` is set when digit `d` is still possible.

use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// The largest digit a `Candidates` set can hold.
pub const MAX_DIGIT: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub struct Candidates(u32);

impl Candidates {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All digits `1..=n`.
    #[must_use]
    pub const fn full(n: usize) -> Self {
        if n >= 32 {
            Self(u32::MAX)
        } else {
            Self((1 << n) - 1)
        }
    }

    #[must_use]
    pub const fn single(digit: u8) -> Self {
        Self(1 << (digit - 1))
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        digit != 0 && digit <= MAX_DIGIT && self.0 & (1 << (digit - 1)) != 0
    }

    pub const fn insert(&mut self, digit: u8) {
        self.0 |= 1 << (digit - 1);
    }

    /// Removes `digit`, returning whether it was present.
    pub const fn remove(&mut self, digit: u8) -> bool {
        let had = self.contains(digit);
        self.0 &= !(1 << (digit - 1));
        had
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// The only digit in the set, if there is exactly one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn single_value(self) -> Option<u8> {
        if self.0.is_power_of_two() {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Digits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            #[allow(clippy::cast_possible_truncation)]
            let digit = bits.trailing_zeros() as u8 + 1;
            bits &= bits - 1;
            Some(digit)
        })
    }
}

impl FromIterator<u8> for Candidates {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::empty();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitOr for Candidates {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Candidates {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Candidates {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Candidates {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Sub for Candidates {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 & !rhs.0)
    }
}

impl SubAssign for Candidates {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 &= !rhs.0;
    }
}

impl Display for Candidates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}
