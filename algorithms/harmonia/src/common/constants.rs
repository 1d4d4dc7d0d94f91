//! Harmonia numeric constants.
//!
//! All constants derive from the golden ratio φ = (1+√5)/2:
//!
//! ```text
//! PHI_CONSTANTS[i]        = golden-ratio derived round constants
//! RECIPROCAL_CONSTANTS[i] = 1/φ derived round constants
//! GOLDEN_WEYL             = floor(2^32 / φ)
//! ```
//!
//! together with the Fibonacci sequence. The tables are part of the wire
//! format: every published test vector depends on their exact values, so
//! they are fixed byte for byte to the reference implementation.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Compression block size in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes (256-bit output).
pub const DIGEST_SIZE: usize = 32;

// =============================================================================
// GOLDEN RATIO
// =============================================================================

/// Golden ratio in 32-bit fixed point: floor(2^32 / φ).
pub const GOLDEN_WEYL: u32 = 0x9E37_79B9;

/// Golden-ratio derived round constants (Hamming weight ~16).
pub const PHI_CONSTANTS: [u32; 16] = [
    0x9E37_605A, 0xDAC1_E0F2, 0xF287_A338, 0xFA8C_FC04,
    0xFD80_5AA6, 0xCCF2_9760, 0xFF81_84C3, 0xFF85_0D11,
    0xCC32_476B, 0x9876_7486, 0xFFF8_2080, 0x30E4_E2F3,
    0xFCC3_ACC1, 0xE521_6F38, 0xF30E_4CC9, 0x9483_95F6,
];

/// 1/φ derived round constants.
pub const RECIPROCAL_CONSTANTS: [u32; 16] = [
    0x7249_217F, 0x5890_EB7C, 0x4786_B47C, 0x4C51_DBE8,
    0x4E4D_A61B, 0x4F76_650C, 0x4F2F_1A2A, 0x4F6C_E289,
    0x4F1A_DF40, 0x4E84_BABC, 0x4F22_D993, 0x497F_A704,
    0x4F51_4F19, 0x4E8F_43B8, 0x508E_2FD9, 0x4B5F_94A4,
];

// =============================================================================
// FIBONACCI
// =============================================================================

/// First 12 Fibonacci numbers, indexed `r mod 12` by round logic.
pub const FIBONACCI: [u32; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
