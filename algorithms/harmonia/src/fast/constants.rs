//! HARMONIA-Fast scheduling tables.

/// Round-type word for the 32-round schedule, 1 = golden, 0 = complementary.
///
/// The reference stores the word as the 31-character C string
/// `"ABAABABAABAABABAABABAABAABABAAB"` in a 32-byte array, so round 31
/// reads the NUL terminator and takes the complementary branch. That quirk
/// is load-bearing (the digests depend on it), so the final entry is 0.
#[rustfmt::skip]
pub const FIBONACCI_WORD: [u8; 32] = [
    1,0,1,1,0,1,0,1,1,0,1,1,0,1,0,1,
    1,0,1,0,1,1,0,1,1,0,1,0,1,1,0,0,
];

/// Quasicrystal rotation table, 32 rows x 10 columns, entries in 1..=21.
#[rustfmt::skip]
pub const QUASICRYSTAL_ROTATIONS: [[u8; 10]; 32] = [
    [14, 14, 14, 14, 14, 14, 14, 14, 14, 14],
    [ 8,  4,  1, 13,  6, 10, 15, 19,  4,  9],
    [ 3, 19, 16,  8, 17,  2,  5, 18, 14,  5],
    [11, 11, 17,  4, 15,  8, 19, 10,  6, 15],
    [17,  1, 20, 14,  5, 21,  9,  2, 16,  7],
    [ 6, 16,  7, 18, 11,  1, 12, 21, 13,  2],
    [ 2, 21, 12,  1, 11, 18,  7, 16,  6, 17],
    [19,  8, 15,  4, 17, 11, 11,  5, 14, 20],
    [ 9,  4, 19, 15, 10,  6,  2, 17,  8, 16],
    [ 4, 15, 10,  6, 19,  8, 17,  2,  5, 18],
    [15,  5, 18,  2, 17,  8, 19,  6, 10, 15],
    [21, 14,  5, 17,  8, 16,  3, 19, 14,  3],
    [ 7, 16,  2, 21,  9,  5, 14, 20,  1, 17],
    [ 1,  6, 17,  7, 18, 12,  1, 11, 21, 13],
    [13, 21, 11,  1, 12, 18,  7, 17,  6,  2],
    [18, 10,  6, 15,  4, 19,  8, 15, 17, 11],
    [ 9,  4, 19, 15, 10,  6,  2, 17,  8, 16],
    [ 4, 15, 10, 19,  6,  8, 17,  2,  5, 18],
    [15,  5, 18,  2, 17,  8,  6, 19, 10, 15],
    [21, 14,  5, 17,  8, 16,  3, 19, 14,  3],
    [ 7, 16,  2, 21,  9,  5, 14,  1, 20, 17],
    [ 1,  6, 17,  7, 12, 18,  1, 11, 21, 13],
    [13, 21, 11,  1, 12, 18,  7, 17,  6, 16],
    [ 5, 18, 10,  6, 15,  4,  8, 19, 17, 11],
    [ 9, 19,  4, 15, 10,  6,  2, 17,  8, 16],
    [18,  4, 15, 10,  6, 19,  8,  2, 17,  5],
    [15, 18,  5,  2, 17,  8, 19,  6, 10, 15],
    [ 3, 21, 14,  5,  8, 17, 16,  3, 14, 19],
    [17,  7, 16,  2, 21,  9,  5, 14, 20,  1],
    [13,  1,  6, 17,  7, 18, 12,  1, 21, 11],
    [ 2, 13, 21, 11,  1, 12,  7, 18,  6, 17],
    [11, 18, 10,  6, 15,  4, 19,  8, 17, 15],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_stay_in_range() {
        for row in &QUASICRYSTAL_ROTATIONS {
            for &rot in row {
                assert!((1..=21).contains(&rot));
            }
        }
    }

    #[test]
    fn final_round_is_complementary() {
        assert_eq!(FIBONACCI_WORD[31], 0);
    }
}
