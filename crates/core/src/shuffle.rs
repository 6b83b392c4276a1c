//! Fisher–Yates shuffle over a private copy of the input.

use rand::Rng;

/// Return a uniformly random permutation of `items`, leaving `items` untouched.
///
/// Walks `i` from the last index down to 1, drawing `j` in `[0, i]` and
/// swapping. Every permutation is equally likely given a uniform `rng`.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}
