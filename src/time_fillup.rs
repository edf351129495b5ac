//! Reconstruct a 24-bit ASTERIX time-of-day (`1/128 s`, wrapping at
//! `0x00A8C000`) from a partial 16-bit stamp. The case structure mirrors
//! `original_source/src/fillup.cpp`, but `ub0` is taken from bits 16..23 of
//! `last_tod` rather than bits 8..15: the missing byte being reconstructed
//! is the *top* octet of the 24-bit counter, not the middle one.
//!
//! State is owned per stream rather than process-global: `last_tod`,
//! `last_tod_available`, `after_midnight` live on a `TodClock` the caller
//! constructs once and threads through every record it decodes.

/// Midnight in `1/128 s` units: `24 * 3600 * 128`.
pub const MIDNIGHT: u32 = 0x00A8_C000;
/// One minute in `1/128 s` units, used to decide `after_midnight`.
const AFTER_MIDNIGHT_WINDOW: u32 = 7680;
/// Threshold (in units of the upper byte, i.e. 2 s each) for "near-equal
/// modulo 256" in case 2 of the fill-up algorithm.
const C2_THRESHOLD: i32 = 5;
const MAX_UB0_AFTER_MIDNIGHT: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodFillResult {
    Tod(u32),
    Skip,
}

/// Per-category time-of-day reconstruction state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TodClock {
    last_tod: Option<u32>,
    after_midnight: bool,
}

impl TodClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_tod_available(&self) -> bool {
        self.last_tod.is_some()
    }

    /// Reconstruct the full 24-bit time-of-day from `partial` (the low 16
    /// bits of the 1/128 s counter). `Skip` when no full baseline is known
    /// yet: decoding is total with respect to `last_tod_available == false`,
    /// since no time field ever appears on the wire without a full baseline
    /// already having been established earlier in the stream.
    pub fn fill_up(&mut self, partial: u16) -> TodFillResult {
        let Some(last_tod) = self.last_tod else {
            return TodFillResult::Skip;
        };

        let mut tod = last_tod & 0x00FF_0000;
        let ub0 = ((last_tod >> 16) & 0xFF) as u8;
        let ub1 = ((partial >> 8) & 0xFF) as u8;

        let ub_diff = (ub0 as i32 - ub1 as i32).abs();
        let case2 = ub_diff <= C2_THRESHOLD || ub_diff >= 255 - C2_THRESHOLD;

        let merged = if ub0 == 0xFF && ub1 == 0x00 {
            // Case 1: partial time of day is one unit higher.
            tod |= partial as u32 & 0x0000_FFFF;
            tod = tod.wrapping_add(0x0001_0000);
            true
        } else if case2 {
            // Case 2: upper bytes fit (somehow).
            if self.after_midnight && ub0 <= MAX_UB0_AFTER_MIDNIGHT && ub1 >= 0xBD {
                tod = 0x00A8_0000 | (partial as u32 & 0x0000_FFFF);
            } else {
                tod |= partial as u32 & 0x0000_FFFF;
                if partial > 0xFA00 && (last_tod & 0x0000_FFFF) < 0x0500 {
                    tod = tod.wrapping_sub(0x0001_0000);
                }
            }
            true
        } else if ub0 > 245 && 256 + ub1 as i32 < ub0 as i32 + 10 {
            // Case 3: fit near overflow.
            tod |= partial as u32 & 0x0000_FFFF;
            true
        } else if (last_tod & 0x00FF_FF00) >= 0x00A8_BD00 {
            // Case 4: crossing midnight.
            tod = partial as u32;
            true
        } else {
            false
        };

        if !merged {
            return TodFillResult::Skip;
        }

        if tod > last_tod && (!self.after_midnight || tod <= AFTER_MIDNIGHT_WINDOW) {
            self.last_tod = Some(tod);
            self.after_midnight = tod <= AFTER_MIDNIGHT_WINDOW;
        }

        TodFillResult::Tod(tod)
    }

    /// Record a fully-qualified time-of-day observation (e.g. from a
    /// service message carrying the full 24-bit stamp), establishing or
    /// advancing the baseline directly.
    pub fn observe_full(&mut self, tod: u32) {
        let tod = tod & 0x00FF_FFFF;
        let should_update = match self.last_tod {
            Some(last) => tod > last,
            None => true,
        };
        if should_update {
            self.last_tod = Some(tod);
            self.after_midnight = tod <= AFTER_MIDNIGHT_WINDOW;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_without_baseline() {
        let mut clock = TodClock::new();
        assert_eq!(clock.fill_up(0x0008), TodFillResult::Skip);
    }

    #[test]
    fn rollover_increments_top_byte() {
        let mut clock = TodClock::new();
        clock.observe_full(0x00FF_F000);
        assert_eq!(clock.fill_up(0x0008), TodFillResult::Tod(0x0100_0008));
    }

    #[test]
    fn midnight_crossing_replaces_baseline() {
        let mut clock = TodClock::new();
        clock.observe_full(0x00A8_BF00);
        assert_eq!(clock.fill_up(0x0100), TodFillResult::Tod(0x0000_0100));
    }

    #[test]
    fn idempotent_for_same_partial_without_state_change() {
        let mut clock = TodClock::new();
        clock.observe_full(0x0010_0000);
        let first = clock.fill_up(0x0100);
        let second = clock.fill_up(0x0100);
        assert_eq!(first, second);
    }

    #[test]
    fn after_midnight_rewinds_to_before_midnight() {
        let mut clock = TodClock::new();
        // Establish a baseline just after midnight.
        clock.observe_full(0x0000_0100);
        assert!(clock.after_midnight);
        // A partial time whose upper byte wraps close to 0xFF (large
        // ub_diff against the small ub0 just after midnight) should rewind
        // into the previous day rather than treating it as a forward jump.
        let result = clock.fill_up(0xFE00);
        assert_eq!(result, TodFillResult::Tod(0x00A8_FE00));
    }
}
