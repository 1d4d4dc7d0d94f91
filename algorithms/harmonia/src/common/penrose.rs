//! Penrose index: a small quasi-periodic integer sequence.
//!
//! Defined as `(floor(n·φ) xor floor(n·φ²)) mod 32` with φ² computed by the
//! reference as the doubly-rounded product `(n·φ)·φ`. Floating point is a
//! portability hazard, so the sequence is shipped as a precomputed table:
//! the variants only ever evaluate it for `n < 256` (message schedules use
//! `n ≤ 64`, stream exchange `n ≤ 70`, the Fast finalization `n ≤ 234`).

/// `PENROSE_INDEX[n] = (floor(n·φ) xor floor((n·φ)·φ)) & 0x1F`, IEEE-754
/// double semantics.
#[rustfmt::skip]
const PENROSE_INDEX: [u8; 256] = [
     0,  3,  6,  3, 12,  5,  6, 25, 24, 25, 10, 13, 12, 23, 18, 31,
    16, 23, 18, 15, 20, 23, 26, 25, 24,  9, 14, 13,  4,  5, 30,  3,
     0,  3, 14,  3,  4, 27, 30, 25,  8,  9, 14, 21, 20, 29, 18, 23,
    16, 15, 18, 23, 28, 31, 26, 23,  8,  9, 10,  5, 28, 29,  6,  1,
     0,  3,  6,  3, 28, 27,  6, 11,  8,  9, 22, 29, 28, 21, 18, 17,
    16, 23, 18, 31, 28, 23, 10, 15,  8, 25, 26, 29,  4,  5, 14,  1,
     0,  1, 30,  3,  4, 11, 14, 11, 24, 27, 30, 21, 20, 13, 14, 17,
    16, 17, 18, 23, 20, 15, 10, 23, 24, 31, 26,  5, 12, 13,  2,  1,
     0,  1,  6,  5, 12, 11,  6, 27, 24, 27, 22, 11, 12, 21, 22, 17,
    16, 17, 18, 13, 12, 23, 26, 31, 24,  7, 10, 15,  4,  5,  2,  1,
     0,  1, 14, 13,  4,  5, 30, 27, 24, 11, 14, 11, 20, 19, 30, 17,
    16, 17, 18, 21, 20, 29, 26, 23,  8, 15, 10,  7, 28, 31,  2,  1,
     0,  1,  2,  5, 28, 29,  6,  9,  8, 11, 22, 27, 28, 19, 22, 19,
    16, 17, 22, 29, 28, 21, 10,  9,  8,  7, 26, 31, 28,  7,  2, 15,
     0,  1,  2, 29,  4,  5, 14,  9,  8, 27, 30, 27, 20, 19, 14, 19,
    16, 19, 30, 21, 20, 13, 10,  9, 24, 25, 26,  7,  4, 15,  2,  7,
];

/// Quasi-periodic index in `0..32` used for schedule shifts, stream
/// exchange selection, and finalization perturbation.
#[inline]
#[must_use]
pub fn penrose_index(n: usize) -> u32 {
    u32::from(PENROSE_INDEX[n % PENROSE_INDEX.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_below_32() {
        for n in 0..256 {
            assert!(penrose_index(n) < 32, "penrose_index({n}) out of range");
        }
    }

    #[test]
    fn known_values() {
        // Spot checks against floor(n*phi) ^ floor((n*phi)*phi), mod 256/32.
        assert_eq!(penrose_index(0), 0);
        assert_eq!(penrose_index(1), 3); // floor(1.618)=1, floor(2.618)=2
        assert_eq!(penrose_index(7), 25); // floor(11.32)=11, floor(18.32)=18
        assert_eq!(penrose_index(70), 6);
        assert_eq!(penrose_index(100), 4);
        assert_eq!(penrose_index(234), 30);
    }
}
