//! Space-efficient sets of candidate digits
//!
//! The solver and the uniqueness check deal with sets of [`Digit`s](crate::Digit)
//! constantly. They are stored as bitmasks in a `u16` so that whole-board
//! snapshots stay cheap to copy.

use crate::digit::Digit;

/// A set of digits, one bit per digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(pub(crate) u16);

impl DigitSet {
    /// Set containing all nine digits
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Empty set
    pub const NONE: DigitSet = DigitSet(0);

    /// Checks if `self` contains `digit`.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds `digit` to this set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Deletes `digit` from this set.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns the number of digits in this set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this set contains any digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    // digit n sits at bit n - 1
    fn bit(digit: Digit) -> u16 {
        1 << (digit.get() - 1)
    }
}

/// Iterator over the digits contained in a [`DigitSet`], in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        debug_assert!(self.0 <= DigitSet::ALL.0, "{:o}", self.0);
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        let bit_pos = lowest_bit.trailing_zeros() as u8;
        self.0 ^= lowest_bit;
        Some(Digit::new(bit_pos + 1))
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_and_empty() {
        assert_eq!(DigitSet::ALL.len(), 9);
        assert_eq!(DigitSet::NONE.len(), 0);
        assert!(DigitSet::NONE.is_empty());
        for digit in Digit::all() {
            assert!(DigitSet::ALL.contains(digit));
            assert!(!DigitSet::NONE.contains(digit));
        }
    }

    #[test]
    fn insert_remove() {
        let mut set = DigitSet::NONE;
        set.insert(Digit::new(4));
        set.insert(Digit::new(9));
        assert_eq!(set.len(), 2);
        assert!(set.contains(Digit::new(4)));
        assert!(!set.contains(Digit::new(5)));

        set.remove(Digit::new(4));
        set.remove(Digit::new(1)); // not present, no-op
        assert_eq!(set.len(), 1);
        assert!(set.contains(Digit::new(9)));
    }

    #[test]
    fn iterates_in_ascending_order() {
        assert!(DigitSet::ALL.into_iter().eq(Digit::all()));

        let mut set = DigitSet::ALL;
        set.remove(Digit::new(3));
        set.remove(Digit::new(7));
        let digits = set.into_iter().map(Digit::get).collect::<Vec<_>>();
        assert_eq!(digits, [1, 2, 4, 5, 6, 8, 9]);
    }
}
