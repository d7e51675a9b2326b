//! Result assembly (spec component 4.5): verify candidates in parallel,
//! then sort and optionally re-index the kept triplets.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::verify::levenshtein_bounded;

/// A verified neighbour pair: `distance = Levenshtein(a[i], b[j]) <= k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub i: u64,
    pub j: u64,
    pub distance: u8,
}

/// Verifies every candidate pair against `a`/`b` under bound `k`, keeping
/// those with distance `<= k`. Verification is independent per pair and runs
/// in parallel; callers are responsible for indexing `a` by the candidate's
/// first coordinate and `b` by its second.
pub fn verify_candidates(
    a: &[Box<[u8]>],
    b: &[Box<[u8]>],
    candidates: &HashSet<(u32, u32)>,
    k: u8,
) -> Vec<(u32, u32, u8)> {
    candidates
        .par_iter()
        .filter_map(|&(i, j)| {
            levenshtein_bounded(&a[i as usize], &b[j as usize], k).map(|d| (i, j, d))
        })
        .collect()
}

/// Sorts verified triplets by `(i, j)` and applies the `zero_index` offset at
/// serialization time only.
pub fn assemble(mut triplets: Vec<(u32, u32, u8)>, zero_index: bool) -> Vec<Match> {
    triplets.sort_unstable_by_key(|&(i, j, _)| (i, j));
    let offset = if zero_index { 0u64 } else { 1u64 };
    triplets
        .into_iter()
        .map(|(i, j, distance)| Match {
            i: i as u64 + offset,
            j: j as u64 + offset,
            distance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_sorts_and_offsets() {
        let triplets = vec![(1, 2, 1), (0, 1, 1)];
        let zero = assemble(triplets.clone(), true);
        assert_eq!(zero[0], Match { i: 0, j: 1, distance: 1 });
        assert_eq!(zero[1], Match { i: 1, j: 2, distance: 1 });

        let one = assemble(triplets, false);
        assert_eq!(one[0], Match { i: 1, j: 2, distance: 1 });
        assert_eq!(one[1], Match { i: 2, j: 3, distance: 1 });
    }
}
