//! HARMONIA-NG constants: initial values and the fixed rotation schedule.

/// Initial golden-stream value: fractional parts of √p for the first eight
/// primes (the SHA-256 initial values).
pub const INITIAL_HASH_G: [u32; 8] = [
    0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A,
    0x510E_527F, 0x9B05_688C, 0x1F83_D9AB, 0x5BE0_CD19,
];

/// Initial complementary-stream value, golden-ratio derived.
pub const INITIAL_HASH_C: [u32; 8] = [
    0x9E37_79B9, 0x7F4A_7C15, 0xF39C_C060, 0x5CED_C834,
    0x2FE1_2A6D, 0x4786_B47C, 0xC8A5_E2F0, 0x3A8D_6B7F,
];

/// Per-round quarter-round rotations, 32 rounds x 4 amounts.
///
/// Generated from the Fibonacci word over the rotation sets A=(7,12,8,16)
/// and B=(5,11,9,13), cycled by round position. Fixed rotations are what
/// make NG vectorizable; the schedule is frozen here because the test
/// vectors depend on it.
#[rustfmt::skip]
pub const ROUND_ROTATIONS: [[u32; 4]; 32] = [
    [12,  8, 16,  7], // round 0:  A
    [11,  9, 13,  5], // round 1:  B
    [ 8, 16,  7, 12], // round 2:  A
    [16,  7, 12,  8], // round 3:  A
    [11,  9, 13,  5], // round 4:  B
    [ 7, 12,  8, 16], // round 5:  A
    [11,  9, 13,  5], // round 6:  B
    [12,  8, 16,  7], // round 7:  A
    [ 8, 16,  7, 12], // round 8:  A
    [13,  5, 11,  9], // round 9:  B
    [12,  8, 16,  7], // round 10: A
    [ 7, 12,  8, 16], // round 11: A
    [11,  9, 13,  5], // round 12: B
    [12,  8, 16,  7], // round 13: A
    [ 9, 13,  5, 11], // round 14: B
    [16,  7, 12,  8], // round 15: A
    [12,  8, 16,  7], // round 16: A
    [ 5, 11,  9, 13], // round 17: B
    [12,  8, 16,  7], // round 18: A
    [11,  9, 13,  5], // round 19: B
    [ 8, 16,  7, 12], // round 20: A
    [16,  7, 12,  8], // round 21: A
    [11,  9, 13,  5], // round 22: B
    [ 7, 12,  8, 16], // round 23: A
    [12,  8, 16,  7], // round 24: A
    [11,  9, 13,  5], // round 25: B
    [ 8, 16,  7, 12], // round 26: A
    [13,  5, 11,  9], // round 27: B
    [12,  8, 16,  7], // round 28: A
    [ 7, 12,  8, 16], // round 29: A
    [11,  9, 13,  5], // round 30: B
    [12,  8, 16,  7], // round 31: A
];

/// Edge-protection rotations (left edge, right edge).
pub const EDGE_ROT_LEFT: u32 = 7;
pub const EDGE_ROT_RIGHT: u32 = 13;

/// Cross-stream diffusion rotation.
pub const CROSS_STREAM_ROT: u32 = 11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_schedule_cycles_two_sets() {
        for (r, rots) in ROUND_ROTATIONS.iter().enumerate() {
            let mut sorted = *rots;
            sorted.sort_unstable();
            assert!(
                sorted == [7, 8, 12, 16] || sorted == [5, 9, 11, 13],
                "round {r} uses an unknown rotation set"
            );
        }
    }
}
