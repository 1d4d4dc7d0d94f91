//! HARMONIA-NG: the SIMD-friendly redesign.
//!
//! 32 rounds of ChaCha-style quarter-rounds with compile-time-fixed
//! rotation schedules, applied identically to both streams; cross-stream
//! diffusion every 4 rounds, edge protection every 8. The absence of
//! data-dependent rotation amounts is what allows the 4-way batch kernels
//! in [`kernels`] to run four messages in vector lanes.

pub(crate) mod constants;
#[doc(hidden)]
pub mod kernels;

use alloc::string::String;

use subtle::ConstantTimeEq;

use crate::common::constants::{FIBONACCI, PHI_CONSTANTS, RECIPROCAL_CONSTANTS};
use crate::common::framing::{load_block_words, store_digest, MdCore};
use crate::common::{edge, mixing, DualState, DIGEST_SIZE};
use crate::types::{BatchLengthError, SelfTestFailure};
use constants::{
    CROSS_STREAM_ROT, EDGE_ROT_LEFT, EDGE_ROT_RIGHT, INITIAL_HASH_C, INITIAL_HASH_G,
    ROUND_ROTATIONS,
};

const ROUNDS: usize = 32;
const SCHEDULE_WORDS: usize = 32;

// =============================================================================
// COMPRESSION
// =============================================================================

/// Expand one block into the 32-word message schedule.
///
/// SHA-2-shaped sigma functions with position-dependent rotations and a
/// Fibonacci additive term.
pub(crate) fn expand_schedule(block: &[u8]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    load_block_words(block, &mut w[..16]);

    for i in 16..SCHEDULE_WORDS {
        let r1 = 7 + (i as u32 % 5);
        let r2 = 17 + (i as u32 % 4);

        let s0 = w[i - 15].rotate_right(r1) ^ w[i - 15].rotate_right(r1 + 11) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(r2) ^ w[i - 2].rotate_right(r2 + 2) ^ (w[i - 2] >> 10);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1)
            .wrapping_add(FIBONACCI[i % 12]);
    }
    w
}

/// Four quarter-rounds (two columns, two diagonals) over one stream.
#[inline]
fn stream_round(s: &mut [u32; 8], rots: [u32; 4]) {
    mixing::quarter_round(s, (0, 1, 2, 3), rots);
    mixing::quarter_round(s, (4, 5, 6, 7), rots);
    mixing::quarter_round(s, (0, 5, 2, 7), rots);
    mixing::quarter_round(s, (4, 1, 6, 3), rots);
}

pub(crate) fn compress(state: &mut DualState, block: &[u8]) {
    let w = expand_schedule(block);

    let mut g = state.g;
    let mut c = state.c;

    for r in 0..ROUNDS {
        let rots = ROUND_ROTATIONS[r];

        // Message injection: forward schedule into g, reversed into c.
        g[0] = g[0].wrapping_add(w[r]);
        c[0] = c[0].wrapping_add(w[31 - r]);

        // Constant injection.
        g[4] ^= PHI_CONSTANTS[r % 16];
        c[4] ^= RECIPROCAL_CONSTANTS[r % 16];

        stream_round(&mut g, rots);
        stream_round(&mut c, rots);

        if (r + 1) % 4 == 0 {
            edge::cross_diffuse(&mut g, &mut c, CROSS_STREAM_ROT);
        }
        if (r + 1) % 8 == 0 {
            edge::protect(&mut g, r, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);
            edge::protect(&mut c, r, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);
        }
    }

    for i in 0..8 {
        state.g[i] = state.g[i].wrapping_add(g[i]);
        state.c[i] = state.c[i].wrapping_add(c[i]);
    }
}

// =============================================================================
// FINALIZATION
// =============================================================================

/// Per-word fusion rotation: `(i*3 + 5) mod 16 + 1`, giving 6,9,12,15,2,5,8,11.
#[inline]
pub(crate) const fn fuse_rot(i: usize) -> u32 {
    ((i as u32 * 3 + 5) % 16) + 1
}

pub(crate) fn finalize_state(state: DualState) -> [u8; DIGEST_SIZE] {
    let mut g = state.g;
    let mut c = state.c;
    edge::protect(&mut g, 32, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);
    edge::protect(&mut c, 33, EDGE_ROT_LEFT, EDGE_ROT_RIGHT);

    let mut fused = [0u32; 8];
    for i in 0..8 {
        let rot = fuse_rot(i);
        fused[i] =
            (g[i].rotate_right(rot) ^ c[i].rotate_left(rot)).wrapping_add(PHI_CONSTANTS[i]);
    }
    store_digest(&fused)
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Incremental HARMONIA-NG hasher.
#[derive(Clone)]
pub struct Hasher {
    core: MdCore,
}

impl Hasher {
    /// Create a hasher with the NG initial chaining value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            core: MdCore::new(INITIAL_HASH_G, INITIAL_HASH_C, compress),
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
        self.core.reset(INITIAL_HASH_G, INITIAL_HASH_C);
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot NG hash.
#[must_use]
pub fn hash(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// One-shot NG hash as 64 lowercase hex characters.
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
// 4-WAY BATCH
// =============================================================================

/// Hash four equal-length messages, element-wise identical to four
/// [`hash`] calls.
///
/// Dispatches to the fastest available batch kernel (NEON, AVX2, or the
/// portable lane-interleaved fallback); every kernel is bit-identical, so
/// this is a throughput interface only.
///
/// # Errors
/// Fails fast with [`BatchLengthError`] when the messages differ in length;
/// no digest is computed.
pub fn hash_batch4(msgs: [&[u8]; 4]) -> Result<[[u8; DIGEST_SIZE]; 4], BatchLengthError> {
    let len = msgs[0].len();
    if msgs.iter().any(|m| m.len() != len) {
        return Err(BatchLengthError {
            lengths: [msgs[0].len(), msgs[1].len(), msgs[2].len(), msgs[3].len()],
        });
    }
    Ok(kernels::best_kernel()(msgs))
}

/// Name of the batch kernel the dispatcher selects on this machine.
#[must_use]
pub fn active_backend() -> &'static str {
    kernels::active_backend()
}

// =============================================================================
// SELF-TEST
// =============================================================================

const TEST_VECTORS: [(&str, &str); 4] = [
    (
        "",
        "f0861e3ad1a2a438b4ceea78d14f21074dcd712b073917b28d7ae7fad8f6a562",
    ),
    (
        "Harmonia",
        "11cd23650f8fd4818848bc6f09da18b06403ed6f5250447c5d1036730cb8987c",
    ),
    (
        "HARMONIA-NG",
        "6d310650be2092be611cf35ea8dcc46b8199a3f6299398fa68dcf73f80f8a334",
    ),
    (
        "The quick brown fox jumps over the lazy dog",
        "05a015d792c2146a00d941ba342e0dbb219ff7ef6da48d05caf8310d3c844172",
    ),
];

/// Check the embedded NG test vectors.
///
/// # Errors
/// Returns the first mismatching vector, with expected and actual digests.
pub fn self_test() -> Result<(), SelfTestFailure> {
    for (input, expected) in TEST_VECTORS {
        let actual = hash(input.as_bytes());
        if hex::encode(actual) != expected {
            return Err(SelfTestFailure {
                variant: "ng",
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
