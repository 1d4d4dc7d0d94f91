//! Consistency & Regression Tests
//!
//! Verifies framing invariants shared by all variants:
//! - Streaming vs one-shot equality under arbitrary chunkings
//! - Padding behavior across every block residue
//! - The two-padding-block window (residues 56..=63)
//! - Large-input streaming (1 MiB in 1 KiB updates)

#![allow(clippy::unwrap_used)]

// =============================================================================
// CHUNKING TRANSPARENCY
// =============================================================================

/// Exercise one variant's streaming interface against its one-shot path.
macro_rules! chunking_suite {
    ($name:ident, $variant:ident) => {
        #[test]
        fn $name() {
            let data: Vec<u8> = (0..311u32).map(|i| (i * 7 + 3) as u8).collect();
            let oneshot = harmonia::$variant::hash(&data);

            for chunk_size in [1usize, 2, 3, 7, 31, 63, 64, 65, 127, 311] {
                let mut hasher = harmonia::$variant::Hasher::new();
                for piece in data.chunks(chunk_size) {
                    hasher.update(piece);
                }
                assert_eq!(
                    hasher.finalize(),
                    oneshot,
                    "chunk size {chunk_size} diverged from one-shot"
                );
            }

            // Degenerate partitions: empty updates interleaved everywhere.
            let mut hasher = harmonia::$variant::Hasher::new();
            hasher.update(&[]);
            for piece in data.chunks(64) {
                hasher.update(piece);
                hasher.update(&[]);
            }
            assert_eq!(hasher.finalize(), oneshot, "empty updates changed the digest");
        }
    };
}

chunking_suite!(test_v2_chunking, v2);
chunking_suite!(test_ng_chunking, ng);
chunking_suite!(test_fast_chunking, fast);

// =============================================================================
// PADDING RESIDUES
// =============================================================================

#[test]
fn test_every_residue_is_consistent() {
    // All 0..=64 residues, fed both whole and byte-at-a-time. Catches
    // off-by-one errors around the 56-byte padding threshold.
    for len in 0..=64usize {
        let data = vec![0xC3u8; len];
        let oneshot = harmonia::v2::hash(&data);

        let mut hasher = harmonia::v2::Hasher::new();
        for byte in &data {
            hasher.update(core::slice::from_ref(byte));
        }
        assert_eq!(hasher.finalize(), oneshot, "residue {len}");
    }
}

#[test]
fn test_block_boundary_lengths_are_distinct() {
    // 55 pads in one block, 56 spills into a second; 64 is an exact block;
    // 119/120 repeat the window one block later. All must hash apart.
    let lengths = [55usize, 56, 63, 64, 65, 119, 120];
    let variants: [fn(&[u8]) -> [u8; 32]; 3] =
        [harmonia::v2::hash, harmonia::ng::hash, harmonia::fast::hash];
    for hash in variants {
        let digests: Vec<_> = lengths.iter().map(|&n| hash(&vec![b'x'; n])).collect();
        for i in 0..digests.len() {
            for j in (i + 1)..digests.len() {
                assert_ne!(
                    digests[i], digests[j],
                    "lengths {} and {} collided",
                    lengths[i], lengths[j]
                );
            }
        }
    }
}

// =============================================================================
// STREAMING AT SCALE
// =============================================================================

#[test]
fn test_streaming_one_mebibyte() {
    // 1024 updates of 1 KiB each must equal the one-shot digest.
    let kib = vec![b'x'; 1024];

    let mut v2 = harmonia::v2::Hasher::new();
    let mut ng = harmonia::ng::Hasher::new();
    for _ in 0..1024 {
        v2.update(&kib);
        ng.update(&kib);
    }

    let whole = vec![b'x'; 1024 * 1024];
    assert_eq!(v2.finalize(), harmonia::v2::hash(&whole));
    assert_eq!(ng.finalize(), harmonia::ng::hash(&whole));
}

// =============================================================================
// HASHER REUSE
// =============================================================================

#[test]
fn test_reset_restores_initial_state() {
    let mut hasher = harmonia::ng::Hasher::new();
    hasher.update(b"garbage that must vanish");
    hasher.reset();
    hasher.update(b"Harmonia");
    assert_eq!(hasher.finalize(), harmonia::ng::hash(b"Harmonia"));
}

#[test]
fn test_clone_forks_the_stream() {
    let mut base = harmonia::v2::Hasher::new();
    base.update(b"shared prefix|");

    let mut left = base.clone();
    left.update(b"left");
    base.update(b"right");

    assert_eq!(left.finalize(), harmonia::v2::hash(b"shared prefix|left"));
    assert_eq!(base.finalize(), harmonia::v2::hash(b"shared prefix|right"));
}
