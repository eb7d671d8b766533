//! N-bit saturating counter, the unit cell of every pattern table.

/// An unsigned counter of `bits` width (1..=8) that clamps at both ends.
///
/// For 2-bit counters the states are:
/// 0 = Strongly Not Taken, 1 = Weakly Not Taken,
/// 2 = Weakly Taken, 3 = Strongly Taken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaturatingCounter {
    value: u8,
    bits: u8,
}

impl SaturatingCounter {
    pub const STRONGLY_NOT_TAKEN: u8 = 0;
    pub const WEAKLY_NOT_TAKEN: u8 = 1;
    pub const WEAKLY_TAKEN: u8 = 2;
    pub const STRONGLY_TAKEN: u8 = 3;

    /// Creates a counter holding `value`, clamped to the representable range.
    pub fn new(bits: u32, value: u8) -> Self {
        debug_assert!((1..=8).contains(&bits), "counter width out of range");
        let mut ctr = Self {
            value: 0,
            bits: bits as u8,
        };
        ctr.value = value.min(ctr.max());
        ctr
    }

    /// The largest not-taken state, which every table starts from.
    pub fn weakly_not_taken(bits: u32) -> Self {
        Self::new(bits, ((1u16 << (bits - 1)) - 1) as u8)
    }

    #[inline(always)]
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn bits(&self) -> u32 {
        self.bits as u32
    }

    #[inline(always)]
    pub fn max(&self) -> u8 {
        ((1u16 << self.bits) - 1) as u8
    }

    /// Taken iff the high bit is set.
    #[inline(always)]
    pub fn read(&self) -> bool {
        (self.value as u16) >= (1u16 << (self.bits - 1))
    }

    /// Steps one state toward `taken`, saturating at 0 and `max()`.
    #[inline(always)]
    pub fn update(&mut self, taken: bool) {
        if taken {
            if self.value < self.max() {
                self.value += 1;
            }
        } else if self.value > 0 {
            self.value -= 1;
        }
    }
}

impl Default for SaturatingCounter {
    fn default() -> Self {
        Self::weakly_not_taken(2)
    }
}
