//! Primitives shared by every Harmonia variant.
//!
//! The variants differ only in their compression functions and constant
//! tables. Numeric constants, the Penrose index, the ARX mixing functions,
//! edge protection, and the Merkle-Damgard framing all live here.

pub(crate) mod constants;
pub(crate) mod edge;
pub(crate) mod framing;
pub(crate) mod mixing;
pub(crate) mod penrose;

pub(crate) use constants::{BLOCK_SIZE, DIGEST_SIZE};

/// The two 8-word state streams every variant evolves in parallel.
///
/// `g` is the "golden" stream, `c` the "complementary" stream; together they
/// hold the full 512-bit chaining value.
#[derive(Clone, Copy)]
pub(crate) struct DualState {
    pub g: [u32; 8],
    pub c: [u32; 8],
}

impl DualState {
    pub(crate) const fn new(g: [u32; 8], c: [u32; 8]) -> Self {
        Self { g, c }
    }
}
