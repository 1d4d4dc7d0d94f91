//! HARMONIA v2.2 scheduling tables.

/// Fibonacci word for round scheduling, 64 symbols of the substitution
/// A→AB, B→A with A=1 (golden round) and B=0 (complementary round):
/// `ABAABABAABAABABAABABAABAABABAABAABABAABABAABAABABAABAABABAABABAAB`.
#[rustfmt::skip]
pub const FIBONACCI_WORD: [u8; 64] = [
    1,0,1,1,0,1,0,1,1,0,1,1,0,1,0,1,
    1,0,1,0,1,1,0,1,1,0,1,0,1,1,0,1,
    1,0,1,0,1,1,0,1,0,1,1,0,1,1,0,1,
    0,1,1,0,1,1,0,1,0,1,1,0,1,0,1,1,
];

/// Quasicrystal rotation table, 66 rows x 10 columns, every entry in 1..=21.
///
/// v2.2 froze this table (rather than generating it from floats at startup)
/// so that rotation amounts are identical on every platform. Row 65 is the
/// highest index reachable: finalization protects the complementary stream
/// with round index 65.
#[rustfmt::skip]
pub const QUASICRYSTAL_ROTATIONS: [[u8; 10]; 66] = [
    [14, 11,  5,  4, 11, 13, 11,  5,  3, 10],
    [ 5, 11, 13, 11,  4,  5, 11, 13, 11,  5],
    [20,  6, 11,  2,  5, 21,  7, 10,  1,  5],
    [14, 18,  7,  7, 17, 14, 18,  9,  9, 15],
    [ 6, 12, 18,  1,  3, 10,  9, 16,  2,  6],
    [16,  2,  6, 14, 13, 18,  6, 11, 10, 11],
    [19, 15, 14, 17,  3, 12, 12, 16,  2, 12],
    [16, 20,  6, 12,  4,  7,  6, 16,  8,  9],
    [16,  1,  6,  6, 21, 11, 10,  5,  5,  4],
    [14, 16, 16,  5, 12, 19, 11, 10, 21,  2],
    [11, 16, 14,  9, 17, 20,  8, 19, 10, 10],
    [18,  3, 10, 13, 13,  1, 20, 20, 18,  4],
    [ 4,  5, 11, 13, 11,  5,  4, 11, 13, 11],
    [13, 10,  3,  5, 12, 13, 11,  4,  5, 11],
    [12,  3,  5, 19,  5, 11,  2,  5, 20,  7],
    [ 5,  5, 20, 15, 18,  7,  6, 18, 14, 18],
    [20, 21, 21,  5, 14, 18,  1,  2,  8, 11],
    [ 3, 20, 15, 16, 21,  4, 16, 14, 17,  5],
    [10,  6, 10,  1, 16, 13, 14,  1, 15, 13],
    [21, 17, 18, 11,  5, 11, 14,  2,  2, 12],
    [20, 17,  2, 17, 18, 19, 15,  7, 13,  6],
    [21,  1,  7,  7,  5, 18, 19, 19, 13,  1],
    [11, 19,  2, 19, 15, 17,  3, 20,  8,  7],
    [13, 10, 16, 20,  3,  8, 18,  8,  5,  2],
    [12, 13, 10,  4,  5, 11, 13, 11,  4,  5],
    [ 2,  6, 12, 13, 10,  3,  6, 12, 13, 10],
    [ 5, 18,  4, 13,  3,  5, 19,  5, 12,  2],
    [ 1, 16, 17,  5,  4, 20, 15, 18,  6,  6],
    [17,  1, 17, 20, 21, 20,  3, 15, 19,  1],
    [17, 13, 15,  5,  1, 16, 15, 20,  2, 18],
    [ 1, 10, 19,  8,  3, 14,  4, 17, 12, 11],
    [ 9, 15,  3,  4, 18, 16,  6, 10, 15, 15],
    [ 2, 21,  3, 12,  5,  8, 19, 14, 11,  3],
    [ 1, 15, 17,  1, 14, 14, 21, 15, 19, 12],
    [ 2, 12, 20, 13, 13,  2,  5, 14, 19, 18],
    [15, 10, 19, 10, 15, 10, 21,  3,  7,  2],
    [10,  3,  6, 12, 13, 10,  3,  6, 12, 13],
    [12, 13,  9,  2,  7, 12, 13, 10,  3,  6],
    [ 2, 15,  4,  5, 18,  3, 13,  3,  5, 19],
    [16,  2,  1,  2, 16, 17,  4,  3, 21, 15],
    [21, 21, 19, 16,  2, 19, 20, 20, 18,  2],
    [ 9, 12,  7, 18, 12, 13,  7,  3, 17, 14],
    [21,  3, 14,  5, 13, 20,  7, 21, 17,  6],
    [ 2, 18, 20,  6, 10,  9,  8, 18, 13,  1],
    [ 6,  3, 15,  8,  1, 19,  3, 14, 15, 20],
    [ 6,  1,  5,  8,  8,  5,  1,  6,  1, 15],
    [ 2,  7, 17, 21, 18, 18, 14,  6,  2, 12],
    [ 4,  4,  9,  9,  8, 15,  6, 19,  4, 21],
    [ 7, 12, 13, 10,  2,  6, 12, 13, 10,  3],
    [ 9,  1,  7, 12, 13,  9,  2,  7, 12, 13],
    [ 4,  4, 16,  1, 15,  4,  5, 17,  2, 14],
    [ 3,  4, 17, 16,  2,  1,  2, 16, 17,  3],
    [18, 12,  7,  1,  1, 19, 15,  4, 20, 21],
    [12, 19,  9,  7, 14,  9, 18, 12, 12,  9],
    [ 3, 17, 21, 21,  1, 11,  8, 15, 20,  5],
    [21, 17, 13,  7, 21, 21,  4,  5, 14, 12],
    [ 3,  6,  1,  1, 15,  3, 14,  1, 14, 16],
    [15, 21, 15, 14,  1, 17, 15,  1, 14,  1],
    [17, 13,  5, 21,  8,  9, 20,  3, 16, 16],
    [ 2,  3,  8, 18, 18, 13,  2,  6, 11,  1],
    [13,  9,  1,  7, 12, 13,  9,  2,  7, 12],
    [ 8, 13, 13,  8,  1,  8, 13, 13,  9,  2],
    [15,  2, 17,  4,  4, 16,  1, 15,  4,  4],
    [18, 15, 20,  4,  5, 17, 16,  1,  2,  3],
    [12,  5,  2, 17, 11,  8,  2,  1, 18, 14],
    [ 6, 21,  1, 14, 20,  8,  5, 17, 10, 19],
];
