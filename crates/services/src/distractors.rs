//! Wrong-option generation for multiple-choice activities.

use rand::Rng;
use rand::seq::SliceRandom;

/// Draws up to `count` wrong options from `pool` without replacement,
/// skipping every entry equal to `correct`.
///
/// Yields fewer than `count` entries when the pool has fewer distinct-from-
/// correct candidates.
#[must_use]
pub fn draw<T, R>(correct: &T, pool: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<T> = pool
        .iter()
        .filter(|entry| *entry != correct)
        .cloned()
        .collect();
    candidates.as_mut_slice().shuffle(rng);
    candidates.truncate(count);
    candidates
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
