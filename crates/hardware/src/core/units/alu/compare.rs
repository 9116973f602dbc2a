//! ALU comparison.

use crate::core::arch::flags::Flags;

/// Compares `a` with `b` as unsigned bytes.
///
/// Exactly one of the returned flags is set.
#[inline]
pub const fn compare(a: u8, b: u8) -> Flags {
    let ordering = if a == b {
        std::cmp::Ordering::Equal
    } else if a < b {
        std::cmp::Ordering::Less
    } else {
        std::cmp::Ordering::Greater
    };
    Flags::from_ordering(ordering)
}
