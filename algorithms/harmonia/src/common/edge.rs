//! Edge protection and cross-stream diffusion.
//!
//! Both transformations concentrate extra mixing on the state boundary:
//! edge protection reinforces positions 0 and 7 of a single stream, while
//! cross-stream diffusion couples the two streams at an offset of 3.

use super::constants::{FIBONACCI, GOLDEN_WEYL};

/// Reinforce the edges of one stream.
///
/// The rotation amounts are variant-specific (v2.2 and Fast read them from
/// their quasicrystal tables, NG fixes 7/13); the Fibonacci constant is
/// keyed by the round index.
#[inline]
pub fn protect(s: &mut [u32; 8], r: usize, rot_left: u32, rot_right: u32) {
    s[0] = s[0].rotate_right(rot_left);
    let fib_const = FIBONACCI[r % 12].wrapping_mul(GOLDEN_WEYL);
    s[0] ^= fib_const;

    s[7] = s[7].rotate_left(rot_right);
    s[7] ^= !fib_const;

    let interaction = (s[0] ^ s[7]) >> 16;
    s[0] = s[0].wrapping_add(interaction);
    s[7] = s[7].wrapping_add(interaction);
}

/// Couple the golden stream into the complementary stream and back.
///
/// Sequential in `i`: for `i >= 5` the partner word `c[(i+3) % 8]` has
/// already been rewritten this pass, and the reference feeds that updated
/// value back in.
#[inline]
pub fn cross_diffuse(g: &mut [u32; 8], c: &mut [u32; 8], rot: u32) {
    for i in 0..8 {
        let temp = g[i] ^ c[(i + 3) % 8];
        g[i] = g[i].wrapping_add(temp.rotate_right(rot));
        c[i] ^= temp.rotate_left(rot);
    }
}
