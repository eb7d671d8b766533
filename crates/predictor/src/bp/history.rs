use std::fmt;

/// Fixed-width branch history shift register.
///
/// Bit 0 holds the most recent outcome. Shifting in a new outcome discards
/// the oldest one once `width` outcomes have been recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryRegister {
    bits: u64,
    width: u32,
}

impl HistoryRegister {
    /// Creates an all-not-taken register of `width` bits (1..=64).
    pub fn new(width: u32) -> Self {
        debug_assert!((1..=64).contains(&width), "history width out of range");
        Self { bits: 0, width }
    }

    #[inline(always)]
    fn mask(&self) -> u64 {
        u64::MAX >> (64 - self.width)
    }

    #[inline(always)]
    pub fn shift_in(&mut self, taken: bool) {
        self.bits = ((self.bits << 1) | taken as u64) & self.mask();
    }

    #[inline(always)]
    pub fn value(&self) -> u64 {
        self.bits
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Outcome recorded `i` branches ago (0 = most recent).
    #[inline(always)]
    pub fn bit(&self, i: u32) -> bool {
        (self.bits >> i) & 1 != 0
    }
}

// Printed oldest-first, so the rightmost digit is the newest outcome.
impl fmt::Display for HistoryRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.width as usize)
    }
}
