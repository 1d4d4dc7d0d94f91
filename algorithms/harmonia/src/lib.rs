#![cfg_attr(not(feature = "std"), no_std)]

//! # Harmonia
//!
//! A family of experimental 256-bit hash functions built from the golden
//! ratio, Fibonacci numbers, and quasi-periodic sequences. The internal
//! state is two 8-word streams (golden / complementary) mixed by ARX rounds
//! and fused only at finalization.
//!
//! Three constructions share the same Merkle-Damgard framing:
//!
//! - [`v2`]: HARMONIA v2.2, 64 rounds with variable rotations from a
//!   quasicrystal lookup table and Fibonacci-word round scheduling.
//! - [`fast`]: HARMONIA-Fast, 32 rounds with a reduced A/B schedule.
//! - [`ng`]: HARMONIA-NG, 32 rounds with fixed rotations and ChaCha-style
//!   quarter-rounds, plus a 4-way batch API for SIMD throughput.
//!
//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let digest = harmonia::v2::hash(b"Harmonia");
//!
//! // 2. Streaming
//! let mut hasher = harmonia::ng::Hasher::new();
//! hasher.update(b"Chunk 1");
//! hasher.update(b"Chunk 2");
//! let digest = hasher.finalize();
//!
//! // 3. Verification
//! assert!(harmonia::v2::verify(b"Harmonia", &harmonia::v2::hash(b"Harmonia")));
//! ```
//!
//! The variants are *not* interoperable: each has its own initial values,
//! round structure, and finalization, and each reproduces the digests of its
//! reference implementation byte for byte on every architecture.

// =============================================================================
// MODULES
// =============================================================================

extern crate alloc;

mod common;
mod types;

pub mod fast;
pub mod ng;
pub mod v2;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use types::{BatchLengthError, SelfTestFailure};

/// Digest size in bytes (256-bit output) for every variant.
pub const DIGEST_SIZE: usize = common::DIGEST_SIZE;

/// Internal block size in bytes, shared by all variants.
pub const BLOCK_SIZE: usize = common::BLOCK_SIZE;
