//! Donor index selection for mutation

use rand::Rng;

/// Draw `count` indices from `0..len`, all distinct from each other and
/// from the target `i`, by uniform rejection sampling. Each draw
/// excludes the target and every previously chosen index.
///
/// Caller guarantees `len > count` so the sampling terminates.
pub(crate) fn distinct_indices<R: Rng + ?Sized>(
    i: usize,
    count: usize,
    len: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut idxs: Vec<usize> = Vec::with_capacity(count);
    while idxs.len() < count {
        let r = rng.random_range(0..len);
        if r != i && !idxs.contains(&r) {
            idxs.push(r);
        }
    }
    idxs
}
