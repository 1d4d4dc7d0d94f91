//! HARMONIA v2.2: the original 64-round construction.
//!
//! Variable rotation amounts come from the 66x10 quasicrystal table, round
//! types alternate golden/complementary along a 64-symbol Fibonacci word,
//! and a quasi-periodic exchange couples the two streams after every round.
//! Davies-Meyer feed-forward per block, stream fusion at finalization.

mod constants;

use alloc::string::String;

use subtle::ConstantTimeEq;

use crate::common::constants::{FIBONACCI, PHI_CONSTANTS, RECIPROCAL_CONSTANTS};
use crate::common::framing::{load_block_words, store_digest, MdCore};
use crate::common::penrose::penrose_index;
use crate::common::{edge, mixing, DualState, DIGEST_SIZE};
use crate::types::SelfTestFailure;
use constants::{FIBONACCI_WORD, QUASICRYSTAL_ROTATIONS};

const ROUNDS: usize = 64;
const SCHEDULE_WORDS: usize = 64;

// =============================================================================
// ROTATION SCHEDULE
// =============================================================================

/// Rotation amount for `(round, position)` from the quasicrystal table.
#[inline]
fn qc_rot(r: usize, i: usize) -> u32 {
    u32::from(QUASICRYSTAL_ROTATIONS[r % 66][i % 10])
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// Expand one block into the 64-word message schedule.
fn expand_schedule(block: &[u8]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    load_block_words(block, &mut w[..16]);

    for i in 16..SCHEDULE_WORDS {
        let shift = (penrose_index(i) & 0xF) + 1;
        w[i] = w[i - 2].rotate_right(qc_rot(i, 0))
            ^ w[i - 7].rotate_left(qc_rot(i, 1))
            ^ (w[i - 15] >> shift)
            ^ w[i - 16];
    }
    w
}

/// Quasi-periodic stream exchange after each round.
///
/// Golden rounds run the intensive form over all eight positions; the
/// complementary form only couples the outer edge pair. The `0xFF00` mask
/// is deliberate: the exchange keeps the middle-byte window.
fn exchange_quasi_periodic(g: &mut [u32; 8], c: &mut [u32; 8], r: usize, round_type: u8) {
    if round_type == 1 {
        for i in 0..8 {
            if penrose_index(r + i) % 3 == 0 {
                let temp = g[i] ^ c[i];
                g[i] = g[i].wrapping_add(temp >> 8);
                c[i] = c[i].wrapping_add(temp & 0xFF00);
            }
        }
    } else {
        let temp = g[0] ^ c[7];
        g[0] ^= temp >> 16;
        c[7] ^= temp & 0xFFFF;
    }
}

fn compress(state: &mut DualState, block: &[u8]) {
    let w = expand_schedule(block);

    let mut g = state.g;
    let mut c = state.c;

    for r in 0..ROUNDS {
        let round_type = FIBONACCI_WORD[r];
        let i = r & 7;
        let j = (r + FIBONACCI[r % 12] as usize) & 7;
        let k_phi = PHI_CONSTANTS[r & 15];
        let k_rec = RECIPROCAL_CONSTANTS[r & 15];

        // Writes land a-then-b, so for i == j rounds the second result wins
        // exactly as in the reference.
        if round_type == 1 {
            let (a, b) = mixing::golden(g[i], g[j], k_phi, qc_rot(r, i), qc_rot(r + 1, i + 1));
            g[i] = a;
            g[j] = b;
            g[i] = g[i].wrapping_add(w[r]);

            let (a, b) = mixing::golden(c[i], c[j], k_rec, qc_rot(r, i), qc_rot(r + 1, i + 1));
            c[i] = a;
            c[j] = b;
            c[j] = c[j].wrapping_add(w[63 - r]);
        } else {
            let (a, b) =
                mixing::complementary(g[i], g[j], k_phi, qc_rot(r, i), qc_rot(r + 1, i + 1));
            g[i] = a;
            g[j] = b;
            g[j] = g[j].wrapping_add(w[r]);

            let (a, b) =
                mixing::complementary(c[j], c[i], k_rec, qc_rot(r, j), qc_rot(r + 1, j + 1));
            c[j] = a;
            c[i] = b;
            c[i] = c[i].wrapping_add(w[63 - r]);
        }

        exchange_quasi_periodic(&mut g, &mut c, r, round_type);

        if (r & 7) == 7 {
            edge::protect(&mut g, r, qc_rot(r, 0), qc_rot(r, 7));
            edge::protect(&mut c, r, qc_rot(r, 0), qc_rot(r, 7));
        }
    }

    // Davies-Meyer feed-forward.
    for i in 0..8 {
        state.g[i] = state.g[i].wrapping_add(g[i]);
        state.c[i] = state.c[i].wrapping_add(c[i]);
    }
}

// =============================================================================
// FINALIZATION
// =============================================================================

fn finalize_state(state: DualState) -> [u8; DIGEST_SIZE] {
    let mut g = state.g;
    let mut c = state.c;
    edge::protect(&mut g, 64, qc_rot(64, 0), qc_rot(64, 7));
    edge::protect(&mut c, 65, qc_rot(65, 0), qc_rot(65, 7));

    let mut fused = [0u32; 8];
    for i in 0..8 {
        let rot = qc_rot(i, i);
        fused[i] = (g[i].rotate_right(rot) ^ c[i].rotate_left(rot))
            .wrapping_add(PHI_CONSTANTS[i].wrapping_add(penrose_index(i).wrapping_mul(0x0101_0101)));
    }
    store_digest(&fused)
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Incremental HARMONIA v2.2 hasher.
///
/// Owned, non-shared; distinct hashers may run on distinct threads without
/// synchronization. `update`/`finalize` never allocate.
#[derive(Clone)]
pub struct Hasher {
    core: MdCore,
}

impl Hasher {
    /// Create a hasher with the v2.2 initial chaining value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            core: MdCore::new(iv_g(), iv_c(), compress),
        }
    }

    /// Absorb more input. Any chunking produces the same digest.
    pub fn update(&mut self, data: &[u8]) {
        self.core.update(data);
    }

    /// Pad, fuse the two streams, and return the 32-byte digest.
    #[must_use]
    pub fn finalize(self) -> [u8; DIGEST_SIZE] {
        finalize_state(self.core.finish())
    }

    /// Reset to the just-initialized state for reuse.
    pub fn reset(&mut self) {
        self.core.reset(iv_g(), iv_c());
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

const fn iv_g() -> [u32; 8] {
    let mut iv = [0u32; 8];
    let mut i = 0;
    while i < 8 {
        iv[i] = PHI_CONSTANTS[i];
        i += 1;
    }
    iv
}

const fn iv_c() -> [u32; 8] {
    let mut iv = [0u32; 8];
    let mut i = 0;
    while i < 8 {
        iv[i] = RECIPROCAL_CONSTANTS[i];
        i += 1;
    }
    iv
}

/// One-shot v2.2 hash.
#[must_use]
pub fn hash(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// One-shot v2.2 hash as 64 lowercase hex characters.
#[must_use]
pub fn hash_hex(input: &[u8]) -> String {
    hex::encode(hash(input))
}

/// Compare `hash(input)` against an expected digest in constant time.
#[must_use]
pub fn verify(input: &[u8], expected: &[u8; DIGEST_SIZE]) -> bool {
    hash(input).ct_eq(expected).into()
}

// =============================================================================
// SELF-TEST
// =============================================================================

const TEST_VECTORS: [(&str, &str); 5] = [
    (
        "",
        "3acc512691bd37d475cec1695d99503b4a3401aa9366b312951ba200190bfe3d",
    ),
    (
        "abc",
        "a165d969cbc672777da6746c4e1462dead0d2fa7f75a75fef4fb33afd07bc1ff",
    ),
    (
        "Harmonia",
        "5aa5b3bf63ed5d726288f05da3b9ecc419216b260cc780e2435dddf9bf593257",
    ),
    (
        "HARMONIA",
        "4ad655d4614e11f2e839bfa5f0f2cce13bde89ea9327434a941411f21b65fad3",
    ),
    (
        "The quick brown fox jumps over the lazy dog",
        "39661e930dae99563e597b155d177e331d3016fa65405624c3b2159b9c86b4aa",
    ),
];

/// Check the embedded v2.2 test vectors.
///
/// # Errors
/// Returns the first mismatching vector, with expected and actual digests.
pub fn self_test() -> Result<(), SelfTestFailure> {
    for (input, expected) in TEST_VECTORS {
        let actual = hash(input.as_bytes());
        if hex::encode(actual) != expected {
            return Err(SelfTestFailure {
                variant: "v2",
                input,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

// =============================================================================
// DIGEST TRAIT
// =============================================================================

#[cfg(feature = "digest-trait")]
mod digest_impl {
    use digest::typenum::U32;
    use digest::{FixedOutput, HashMarker, Output, OutputSizeUser, Reset, Update};

    use super::Hasher;

    impl OutputSizeUser for Hasher {
        type OutputSize = U32;
    }

    impl Update for Hasher {
        fn update(&mut self, data: &[u8]) {
            Self::update(self, data);
        }
    }

    impl FixedOutput for Hasher {
        fn finalize_into(self, out: &mut Output<Self>) {
            out.copy_from_slice(&self.finalize());
        }
    }

    impl Reset for Hasher {
        fn reset(&mut self) {
            Self::reset(self);
        }
    }

    impl HashMarker for Hasher {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_vectors_pass() {
        assert_eq!(self_test(), Ok(()));
    }

    #[test]
    fn schedule_depends_on_every_input_word() {
        let mut block = [0u8; 64];
        let base = expand_schedule(&block);
        for byte in 0..64 {
            block[byte] = 0x80;
            let changed = expand_schedule(&block);
            block[byte] = 0;
            assert_ne!(&base[16..], &changed[16..], "byte {byte} never propagated");
        }
    }

    #[test]
    fn some_rounds_alias_their_operands() {
        // Rounds where FIBONACCI[r % 12] is a multiple of 8 (r = 5, 11, ...)
        // pass the same word as both mix operands; the mixes must tolerate
        // that, so the schedule had better actually produce such rounds.
        let aliased = (0..ROUNDS).any(|r| (r & 7) == ((r + FIBONACCI[r % 12] as usize) & 7));
        assert!(aliased);
    }
}
