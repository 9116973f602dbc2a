//! Condition Flags.
//!
//! `CMP` sets exactly one of three mutually exclusive flags: equal, less-than,
//! or greater-than. No other instruction touches them. They are also readable as
//! the packed `FL` byte `0b00000LGE`.

use std::cmp::Ordering;

/// Bit of the `FL` byte holding the equal flag.
pub const FL_EQUAL: u8 = 0b0000_0001;

/// Bit of the `FL` byte holding the greater-than flag.
pub const FL_GREATER: u8 = 0b0000_0010;

/// Bit of the `FL` byte holding the less-than flag.
pub const FL_LESS: u8 = 0b0000_0100;

/// The LS-8 condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Last comparison found `regA == regB`.
    pub equal: bool,
    /// Last comparison found `regA < regB`.
    pub less_than: bool,
    /// Last comparison found `regA > regB`.
    pub greater_than: bool,
}

impl Flags {
    /// Flags describing an ordering of `regA` relative to `regB`.
    pub const fn from_ordering(ordering: Ordering) -> Self {
        Self {
            equal: matches!(ordering, Ordering::Equal),
            less_than: matches!(ordering, Ordering::Less),
            greater_than: matches!(ordering, Ordering::Greater),
        }
    }

    /// Packed `FL` register value.
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.equal {
            bits |= FL_EQUAL;
        }
        if self.greater_than {
            bits |= FL_GREATER;
        }
        if self.less_than {
            bits |= FL_LESS;
        }
        bits
    }
}
