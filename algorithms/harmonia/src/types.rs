//! Shared types used across the Harmonia library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::common::DIGEST_SIZE;

// =============================================================================
// SELF-TEST FAILURE
// =============================================================================

/// Longest input prefix echoed back in a self-test report.
const REPORT_INPUT_LIMIT: usize = 48;

/// A mismatch between an embedded test vector and the computed digest.
///
/// Carries enough context to diagnose the failure without re-running:
/// the offending input, the expected hex digest, and the digest actually
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestFailure {
    /// Variant that failed ("v2", "fast", or "ng").
    pub variant: &'static str,
    /// The test-vector input (UTF-8, possibly empty).
    pub input: &'static str,
    /// Expected digest as 64 lowercase hex characters.
    pub expected: &'static str,
    /// Digest the implementation produced.
    pub actual: [u8; DIGEST_SIZE],
}

impl fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.input.len() > REPORT_INPUT_LIMIT {
            &self.input[..REPORT_INPUT_LIMIT]
        } else {
            self.input
        };
        write!(
            f,
            "harmonia-{} self-test failed for input {shown:?}: expected {}, got ",
            self.variant, self.expected
        )?;
        for byte in &self.actual {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl error::Error for SelfTestFailure {}

// =============================================================================
// BATCH ERRORS
// =============================================================================

/// The 4-way batch interface was handed messages of unequal length.
///
/// No digest is computed; the call fails before any compression runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchLengthError {
    /// The lengths of the four rejected messages.
    pub lengths: [usize; 4],
}

impl fmt::Display for BatchLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "batch hashing requires four equal-length messages, got lengths {}/{}/{}/{}",
            self.lengths[0], self.lengths[1], self.lengths[2], self.lengths[3]
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for BatchLengthError {}
