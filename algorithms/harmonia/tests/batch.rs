//! 4-Way Batch Consistency Tests
//!
//! The batch interface carries no semantics of its own: whatever kernel the
//! dispatcher selects, the four digests must equal four scalar NG hashes.
//! The portable lane-interleaved kernel is the reference every accelerated
//! kernel is held to.

#![allow(clippy::unwrap_used)]

use harmonia::ng;

fn scalar_digests(msgs: [&[u8]; 4]) -> [[u8; 32]; 4] {
    [
        ng::hash(msgs[0]),
        ng::hash(msgs[1]),
        ng::hash(msgs[2]),
        ng::hash(msgs[3]),
    ]
}

// =============================================================================
// SCALAR EQUIVALENCE
// =============================================================================

#[test]
fn test_batch_equals_scalar_across_lengths() {
    // Cover the empty input, sub-block, both padding windows, exact blocks,
    // and multi-block messages.
    for len in [0usize, 1, 12, 55, 56, 63, 64, 65, 119, 120, 128, 200, 1024] {
        let lanes: Vec<Vec<u8>> = (0..4u8)
            .map(|lane| (0..len).map(|i| (i as u8).wrapping_mul(3) ^ lane).collect())
            .collect();
        let msgs = [
            lanes[0].as_slice(),
            lanes[1].as_slice(),
            lanes[2].as_slice(),
            lanes[3].as_slice(),
        ];

        let batch = ng::hash_batch4(msgs).unwrap();
        assert_eq!(batch, scalar_digests(msgs), "length {len}");
    }
}

#[test]
fn test_batch_lanes_do_not_leak() {
    // Changing one lane must leave the other three digests untouched.
    let base: [&[u8]; 4] = [b"lane a", b"lane b", b"lane c", b"lane d"];
    let poked: [&[u8]; 4] = [b"lane a", b"lane b", b"lane X", b"lane d"];

    let before = ng::hash_batch4(base).unwrap();
    let after = ng::hash_batch4(poked).unwrap();

    assert_eq!(before[0], after[0]);
    assert_eq!(before[1], after[1]);
    assert_ne!(before[2], after[2]);
    assert_eq!(before[3], after[3]);
}

// =============================================================================
// KERNEL CROSS-CHECK
// =============================================================================

#[test]
fn test_dispatched_kernel_matches_portable() {
    // Whatever backend the dispatcher picks on this machine, it must be
    // bit-identical to the portable source of truth.
    let lanes: Vec<Vec<u8>> = (0..4u8).map(|l| vec![l.wrapping_mul(0x41); 777]).collect();
    let msgs = [
        lanes[0].as_slice(),
        lanes[1].as_slice(),
        lanes[2].as_slice(),
        lanes[3].as_slice(),
    ];

    let dispatched = ng::kernels::best_kernel()(msgs);
    let portable = ng::kernels::portable::oneshot_x4(msgs);
    assert_eq!(
        dispatched,
        portable,
        "backend {} diverged from portable",
        ng::active_backend()
    );
}

#[test]
fn test_backend_name_is_known() {
    assert!(["portable", "neon", "avx2"].contains(&ng::active_backend()));
}

// =============================================================================
// ARGUMENT MISUSE
// =============================================================================

#[test]
fn test_unequal_lengths_fail_fast() {
    let err = ng::hash_batch4([b"aa", b"aa", b"aa", b"a"]).unwrap_err();
    assert_eq!(err.lengths, [2, 2, 2, 1]);
    let msg = err.to_string();
    assert!(msg.contains("equal-length"), "unhelpful error: {msg}");
}
