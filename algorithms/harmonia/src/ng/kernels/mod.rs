//! 4-way batch kernels for HARMONIA-NG.
//!
//! Each kernel hashes four independent equal-length messages in lock-step,
//! one message per vector lane. The portable kernel is the source of truth;
//! the NEON and AVX2 kernels must produce bit-identical digests and exist
//! purely for throughput. Selection happens at runtime where `std` allows
//! feature detection, at compile time otherwise.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;
#[cfg(target_arch = "aarch64")]
pub mod neon;
pub mod portable;

use crate::common::constants::BLOCK_SIZE;
use crate::common::DIGEST_SIZE;

/// Unified batch kernel signature: four equal-length messages in, four
/// digests out.
pub type Batch4Fn = fn([&[u8]; 4]) -> [[u8; DIGEST_SIZE]; 4];

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest batch kernel for this CPU.
#[must_use]
#[allow(unreachable_code)] // the cfg ladder ends in an unconditional fallback
pub fn best_kernel() -> Batch4Fn {
    // 1. Runtime dispatch (std-only).
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("avx2") {
            return avx2::oneshot_x4;
        }
    }

    // 2. Compile-time dispatch (no_std).
    #[cfg(all(
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "avx2"
    ))]
    return avx2::oneshot_x4;

    // NEON is architecturally mandatory on AArch64; no detection needed.
    #[cfg(target_arch = "aarch64")]
    return neon::oneshot_x4;

    // 3. Portable fallback.
    portable::oneshot_x4
}

/// Name of the backend [`best_kernel`] selects.
#[must_use]
#[allow(unreachable_code)]
pub fn active_backend() -> &'static str {
    #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if is_x86_feature_detected!("avx2") {
            return "avx2";
        }
    }
    #[cfg(all(
        not(feature = "std"),
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "avx2"
    ))]
    return "avx2";

    #[cfg(target_arch = "aarch64")]
    return "neon";

    "portable"
}

// =============================================================================
// SHARED FRAMING
// =============================================================================

/// The padded final block(s) of one message: one block when the residue is
/// below 56 bytes, two otherwise.
pub(crate) struct Tail {
    pub blocks: [[u8; BLOCK_SIZE]; 2],
    pub count: usize,
}

/// Build the Merkle-Damgard tail for a message of `total_len` bytes whose
/// unprocessed remainder is `rem` (`rem.len() < 64`).
///
/// Equal-length messages produce equal tail counts, so the batch kernels
/// stay in lock-step through padding.
pub(crate) fn tail_blocks(rem: &[u8], total_len: u64) -> Tail {
    let bit_len = total_len.wrapping_mul(8);
    let mut tail = Tail {
        blocks: [[0u8; BLOCK_SIZE]; 2],
        count: 1,
    };

    tail.blocks[0][..rem.len()].copy_from_slice(rem);
    tail.blocks[0][rem.len()] = 0x80;

    let last = if rem.len() < 56 {
        0
    } else {
        tail.count = 2;
        1
    };
    tail.blocks[last][56..].copy_from_slice(&bit_len.to_be_bytes());
    tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ng;

    #[test]
    fn tail_matches_streaming_padding() {
        // Compressing the tail blocks must finish exactly like Hasher does.
        for len in [0usize, 1, 55, 56, 63] {
            let msg = alloc::vec![0xA5u8; len];
            let tail = tail_blocks(&msg, len as u64);

            let mut state = crate::common::DualState::new(
                ng::constants::INITIAL_HASH_G,
                ng::constants::INITIAL_HASH_C,
            );
            for block in &tail.blocks[..tail.count] {
                ng::compress(&mut state, block);
            }
            let digest = ng::finalize_state(state);
            assert_eq!(digest, ng::hash(&msg), "length {len}");
        }
    }
}
