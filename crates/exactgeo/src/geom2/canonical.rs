//! Rotation- and reflection-invariant form of a vertex cycle.
//!
//! Vertices are replaced by their rank in lexicographic `(x, y)` order; the
//! forward and the reversed rank cycles are each rotated to their least
//! rotation (Booth's failure-function scan over the doubled sequence) and
//! the smaller of the two is mapped back to points.
//!
//! References
//! - Lexicographically minimal string rotation (Booth, 1980).

use super::point::Point;

/// Canonical representative of the cycle `vertices` (up to rotation and
/// reversal). Two cycles are equal iff their canonical forms are.
pub(crate) fn canonical_form(vertices: &[Point]) -> Vec<Point> {
    let mut dict: Vec<&Point> = vertices.iter().collect();
    dict.sort();
    dict.dedup();
    let rank = |p: &Point| dict.binary_search(&p).unwrap_or_else(|i| i);

    let forward: Vec<usize> = vertices.iter().map(rank).collect();
    let backward: Vec<usize> = forward.iter().rev().copied().collect();

    let fwd = rotate_left(&forward, least_rotation(&forward));
    let bwd = rotate_left(&backward, least_rotation(&backward));
    let best = if fwd < bwd { fwd } else { bwd };
    best.into_iter().map(|r| dict[r].clone()).collect()
}

/// Number of left rotations giving the lexicographically smallest rotation.
pub(crate) fn least_rotation(x: &[usize]) -> usize {
    let s: Vec<usize> = x.iter().chain(x).copied().collect();
    let mut f: Vec<isize> = vec![-1; s.len()];
    let mut k = 0usize;
    for j in 1..s.len() {
        let sj = s[j];
        let mut i = f[j - k - 1];
        while i != -1 && sj != s[k + (i + 1) as usize] {
            if sj < s[k + (i + 1) as usize] {
                k = j - i as usize - 1;
            }
            i = f[i as usize];
        }
        // Here either i == -1 or the scan matched.
        if sj != s[k + (i + 1) as usize] {
            if sj < s[k] {
                k = j;
            }
            f[j - k] = -1;
        } else {
            f[j - k] = i + 1;
        }
    }
    k
}

pub(crate) fn rotate_left<T: Clone>(x: &[T], k: usize) -> Vec<T> {
    if x.is_empty() {
        return Vec::new();
    }
    let k = k % x.len();
    x[k..].iter().chain(&x[..k]).cloned().collect()
}
