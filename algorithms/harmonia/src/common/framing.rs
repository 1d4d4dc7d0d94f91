//! Merkle-Damgard framing shared by all variants.
//!
//! Incremental absorption into a fixed 64-byte buffer, classic MD
//! strengthening (0x80, zero pad to 56 mod 64, 64-bit big-endian bit
//! length), and a compression-function seam so each variant plugs in its
//! own block transform. Allocation-free: the working set is the context
//! itself.

use super::{constants::BLOCK_SIZE, DualState};

/// Per-block compression: consumes a 64-byte block, updates the chaining
/// value in place. The slice is always exactly [`BLOCK_SIZE`] bytes.
pub(crate) type CompressFn = fn(&mut DualState, &[u8]);

/// Shared incremental hashing core.
///
/// Invariants: `buffer_len < 64` between calls; `total_len` counts every
/// absorbed byte. After [`Self::finish`] the core is consumed.
#[derive(Clone)]
pub(crate) struct MdCore {
    state: DualState,
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    total_len: u64,
    compress: CompressFn,
}

impl MdCore {
    pub(crate) const fn new(iv_g: [u32; 8], iv_c: [u32; 8], compress: CompressFn) -> Self {
        Self {
            state: DualState::new(iv_g, iv_c),
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
            compress,
        }
    }

    /// Absorb `data`, compressing every completed 64-byte block.
    pub(crate) fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        // Top up a partially filled buffer first.
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == BLOCK_SIZE {
                let block = self.buffer;
                (self.compress)(&mut self.state, &block);
                self.buffer_len = 0;
            }
        }

        // Full blocks straight from the input, no copy.
        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            (self.compress)(&mut self.state, block);
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            self.buffer[..tail.len()].copy_from_slice(tail);
            self.buffer_len = tail.len();
        }
    }

    /// Apply MD strengthening and return the final chaining value.
    pub(crate) fn finish(mut self) -> DualState {
        let bit_len = self.total_len.wrapping_mul(8);

        // 0x80, zeros to 56 mod 64, then the bit length. A residue of 56+
        // bytes spills into a second padding block.
        let mut pad = [0u8; 2 * BLOCK_SIZE];
        pad[0] = 0x80;
        let zeros = if self.buffer_len < 56 {
            56 - self.buffer_len
        } else {
            120 - self.buffer_len
        };
        pad[zeros..zeros + 8].copy_from_slice(&bit_len.to_be_bytes());
        self.update(&pad[..zeros + 8]);

        debug_assert_eq!(self.buffer_len, 0);
        self.state
    }

    /// Restore the just-initialized state for hasher reuse.
    pub(crate) fn reset(&mut self, iv_g: [u32; 8], iv_c: [u32; 8]) {
        self.state = DualState::new(iv_g, iv_c);
        self.buffer_len = 0;
        self.total_len = 0;
    }
}

/// Parse the first 16 big-endian words of a block into `words`.
#[inline]
pub(crate) fn load_block_words(block: &[u8], words: &mut [u32]) {
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Emit eight fused words as a big-endian 32-byte digest.
#[inline]
pub(crate) fn store_digest(words: &[u32; 8]) -> [u8; super::DIGEST_SIZE] {
    let mut digest = [0u8; super::DIGEST_SIZE];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}
