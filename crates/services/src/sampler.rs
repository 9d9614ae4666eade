//! Working-set sampling over the master pools.

use rand::Rng;
use rand::seq::SliceRandom;

/// Draws up to `count` entries from `pool` without replacement.
///
/// Returns `min(pool.len(), count)` entries in randomized order; the order
/// carries no trace of the pool order. The caller supplies the RNG, so a
/// seeded RNG reproduces the same draw.
#[must_use]
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    if count == 0 || pool.is_empty() {
        return Vec::new();
    }

    let mut drawn: Vec<T> = pool.to_vec();
    drawn.as_mut_slice().shuffle(rng);
    drawn.truncate(count);
    drawn
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
