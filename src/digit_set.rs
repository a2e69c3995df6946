/// Set of digits 1-9, stored one bit per digit in a u16
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigitSet(u16);

const ALL_DIGITS: u16 = 0b11_1111_1110;

impl DigitSet {
    #[inline(always)]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub const fn contains(self, digit: u8) -> bool {
        self.0 & (1 << digit) != 0
    }

    /// Add a digit, reporting whether it was newly added. Digits must be in
    /// 1..=9.
    #[inline(always)]
    pub fn insert(&mut self, digit: u8) -> bool {
        debug_assert!((1..=9).contains(&digit));
        let newly_added = self.0 & (1 << digit) == 0;
        self.0 |= 1 << digit;
        newly_added
    }

    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Does the set hold every digit 1-9?
    #[inline(always)]
    pub const fn is_complete(self) -> bool {
        self.0 == ALL_DIGITS
    }
}
