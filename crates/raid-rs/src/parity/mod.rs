//! XOR parity combination and recovery over fixed-size byte blocks.
//!
//! These are the pure primitives the parity layouts build on. XOR is its own
//! inverse, so the same fold both derives a stripe's parity block and
//! reconstructs any single missing stripe member.


/// `xor_into` folds `src` into `acc` byte-wise.
#[inline]
pub fn xor_into(acc: &mut [u8], src: &[u8]) {
    debug_assert_eq!(acc.len(), src.len());
    for (a, b) in acc.iter_mut().zip(src) {
        *a ^= *b;
    }
}

/// `combine` returns the byte-wise XOR of all input blocks. The result does
/// not depend on input order.
///
/// # Panics
/// Panics if the blocks do not share one length.
#[must_use]
pub fn combine(blocks: &[&[u8]]) -> Vec<u8> {
    let len = blocks.first().map_or(0, |b| b.len());
    let mut parity = vec![0u8; len];
    for block in blocks {
        assert_eq!(block.len(), len, "parity inputs must share one length");
        xor_into(&mut parity, block);
    }
    parity
}

/// `recover` reconstructs the stripe member missing from `known`, given the
/// stripe's parity block: mathematically `parity ⊕ XOR(known)`. Any N−1 of
/// the N stripe members (data blocks plus parity) determine the Nth.
///
/// # Panics
/// Panics if any known block differs in length from the parity block.
#[must_use]
pub fn recover(known: &[&[u8]], parity: &[u8]) -> Vec<u8> {
    let mut out = parity.to_vec();
    for block in known {
        assert_eq!(block.len(), parity.len(), "parity inputs must share one length");
        xor_into(&mut out, block);
    }
    out
}
