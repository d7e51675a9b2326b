//! Candidate join (spec component 4.3): pairs of postings sharing a variant
//! key become candidate pairs. Deduplication is keyed by the pair alone;
//! deletion depths are not retained past this stage.

use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;

use crate::index::VariantIndex;

/// Within-set candidate join: for every key with at least two postings,
/// emits the unordered pair `(min, max)` for every distinct pair of source
/// indices under that key.
pub fn within_candidates(index: &VariantIndex) -> HashSet<(u32, u32)> {
    let keys: Vec<_> = index.iter().collect();
    let candidates = keys
        .par_iter()
        .fold(HashSet::new, |mut local: HashSet<(u32, u32)>, (_, postings)| {
            for a in 0..postings.len() {
                for b in (a + 1)..postings.len() {
                    let (ia, ib) = (postings[a].index, postings[b].index);
                    if ia != ib {
                        local.insert(if ia < ib { (ia, ib) } else { (ib, ia) });
                    }
                }
            }
            local
        })
        .reduce(HashSet::new, union);

    debug!("within-set join produced {} candidates", candidates.len());
    candidates
}

/// Cross-set candidate join between a prebuilt query index and a prebuilt
/// reference index: for each key present in the smaller index, looks it up
/// in the other and emits the cartesian product `(q, r)` of the two posting
/// lists. Iterating the smaller side avoids materializing unnecessary work
/// when the two sets differ greatly in size.
pub fn cross_candidates(query: &VariantIndex, reference: &VariantIndex) -> HashSet<(u32, u32)> {
    let (smaller, larger, swapped) = if query.len() <= reference.len() {
        (query, reference, false)
    } else {
        (reference, query, true)
    };

    if smaller.is_empty() {
        return HashSet::new();
    }

    let keys: Vec<_> = smaller.iter().collect();
    let candidates = keys
        .par_iter()
        .fold(HashSet::new, |mut local: HashSet<(u32, u32)>, (key, small_postings)| {
            if let Some(large_postings) = larger.lookup(key) {
                for sp in small_postings.iter() {
                    for lp in large_postings.iter() {
                        let pair = if swapped {
                            (lp.index, sp.index)
                        } else {
                            (sp.index, lp.index)
                        };
                        local.insert(pair);
                    }
                }
            }
            local
        })
        .reduce(HashSet::new, union);

    debug!("cross-set join produced {} candidates", candidates.len());
    candidates
}

fn union(mut a: HashSet<(u32, u32)>, b: HashSet<(u32, u32)>) -> HashSet<(u32, u32)> {
    if a.len() < b.len() {
        return union(b, a);
    }
    a.extend(b);
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(strings: &[&str]) -> Vec<Box<[u8]>> {
        strings
            .iter()
            .map(|s| s.as_bytes().to_vec().into_boxed_slice())
            .collect()
    }

    #[test]
    fn within_set_pairs_are_canonical_and_deduped() {
        let strings = boxed(&["fizz", "fuzz", "buzz"]);
        let index = VariantIndex::build(&strings, 1);
        let candidates = within_candidates(&index);
        assert!(candidates.contains(&(0, 1)));
        assert!(candidates.contains(&(1, 2)));
        for (a, b) in &candidates {
            assert!(a < b);
        }
    }

    #[test]
    fn cross_set_preserves_query_then_reference_order() {
        let query = boxed(&["fizz", "fuzz", "buzz"]);
        let reference = boxed(&["fooo", "barr", "bazz", "buzz"]);
        let qi = VariantIndex::build(&query, 1);
        let ri = VariantIndex::build(&reference, 1);
        let candidates = cross_candidates(&qi, &ri);
        assert!(candidates.contains(&(2, 3)));
    }

    #[test]
    fn cross_set_is_symmetric_under_swap() {
        let a = boxed(&["fizz", "fuzz", "buzz"]);
        let b = boxed(&["fooo", "barr", "bazz", "buzz"]);
        let ai = VariantIndex::build(&a, 1);
        let bi = VariantIndex::build(&b, 1);
        let forward = cross_candidates(&ai, &bi);
        let backward: HashSet<(u32, u32)> = cross_candidates(&bi, &ai)
            .into_iter()
            .map(|(x, y)| (y, x))
            .collect();
        assert_eq!(forward, backward);
    }
}
