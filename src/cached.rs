//! Memoization facade (spec component 4.6): a handle that builds a variant
//! index once and supports repeated within-set and cross-set queries against
//! it, including queries against another cached handle that bypass variant
//! generation on both sides.

use crate::ascii::normalize;
use crate::config::SymdelConfig;
use crate::error::{Result, SymdelError};
use crate::index::VariantIndex;
use crate::join::{cross_candidates, within_candidates};
use crate::result::{assemble, verify_candidates, Match};

/// An immutable `(strings, k_max, index)` handle. Once constructed, a
/// `CachedSymdel` is read-only; concurrent read access from multiple threads
/// requires no locking.
pub struct CachedSymdel {
    strings: Vec<Box<[u8]>>,
    k_max: u8,
    index: VariantIndex,
    config: SymdelConfig,
}

impl CachedSymdel {
    /// Builds a handle over `reference`, precomputing its variant index at
    /// depth `k_max`. Later calls may use any `k_call <= k_max`.
    pub fn new<I, S>(reference: I, k_max: u8) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(reference, k_max, SymdelConfig::default())
    }

    pub fn with_config<I, S>(reference: I, k_max: u8, config: SymdelConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let strings = normalize(reference)?;
        let index = config.scoped(|| VariantIndex::build(&strings, k_max));
        Ok(CachedSymdel {
            strings,
            k_max,
            index,
            config,
        })
    }

    pub fn k_max(&self) -> u8 {
        self.k_max
    }

    pub fn reference(&self) -> &[Box<[u8]>] {
        &self.strings
    }

    fn check_bound(&self, k_call: u8) -> Result<()> {
        if k_call > self.k_max {
            return Err(SymdelError::DistanceExceedsCache {
                requested: k_call,
                max: self.k_max,
            });
        }
        Ok(())
    }

    /// Within-reference query: reuses the stored index for the join step.
    pub fn symdel_within(&self, k_call: u8, zero_index: bool) -> Result<Vec<Match>> {
        self.check_bound(k_call)?;
        let triplets = self.config.scoped(|| {
            let candidates = within_candidates(&self.index);
            verify_candidates(&self.strings, &self.strings, &candidates, k_call)
        });
        Ok(assemble(triplets, zero_index))
    }

    /// Cross query against a raw (uncached) query set: generates the query's
    /// variants on the fly at depth `k_call`, then joins against the stored
    /// reference index.
    pub fn symdel_cross<I, S>(&self, query: I, k_call: u8, zero_index: bool) -> Result<Vec<Match>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.check_bound(k_call)?;
        let query_strings = normalize(query)?;
        let triplets = self.config.scoped(|| {
            let query_index = VariantIndex::build(&query_strings, k_call);
            let candidates = cross_candidates(&query_index, &self.index);
            verify_candidates(&query_strings, &self.strings, &candidates, k_call)
        });
        Ok(assemble(triplets, zero_index))
    }

    /// Cross query against another cached handle: bypasses variant
    /// generation entirely on both sides, joining the two stored indexes
    /// directly.
    pub fn symdel_cross_against_cached(
        &self,
        other: &CachedSymdel,
        k_call: u8,
        zero_index: bool,
    ) -> Result<Vec<Match>> {
        self.check_bound(k_call)?;
        if self.k_max != other.k_max {
            return Err(SymdelError::MismatchedCacheBound {
                left_max: self.k_max,
                right_max: other.k_max,
            });
        }
        let triplets = self.config.scoped(|| {
            let candidates = cross_candidates(&other.index, &self.index);
            verify_candidates(&other.strings, &self.strings, &candidates, k_call)
        });
        Ok(assemble(triplets, zero_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_matches_free_function() {
        let cached = CachedSymdel::new(["fizz", "fuzz", "buzz"], 1).unwrap();
        let result = cached.symdel_within(1, true).unwrap();
        let pairs: Vec<(u64, u64, u8)> = result.into_iter().map(|m| (m.i, m.j, m.distance)).collect();
        assert_eq!(pairs, vec![(0, 1, 1), (1, 2, 1)]);
    }

    #[test]
    fn rejects_k_call_above_k_max() {
        let cached = CachedSymdel::new(["fizz", "fuzz"], 1).unwrap();
        let err = cached.symdel_within(2, true).unwrap_err();
        assert_eq!(
            err,
            SymdelError::DistanceExceedsCache { requested: 2, max: 1 }
        );
    }

    #[test]
    fn rejects_mismatched_cache_bounds() {
        let a = CachedSymdel::new(["fizz", "fuzz"], 1).unwrap();
        let b = CachedSymdel::new(["buzz"], 2).unwrap();
        let err = a.symdel_cross_against_cached(&b, 1, true).unwrap_err();
        assert_eq!(
            err,
            SymdelError::MismatchedCacheBound { left_max: 1, right_max: 2 }
        );
    }

    #[test]
    fn cross_against_cached_matches_cross_against_raw() {
        let reference = CachedSymdel::new(["fooo", "barr", "bazz", "buzz"], 2).unwrap();
        let query = CachedSymdel::new(["fizz", "fuzz", "buzz"], 2).unwrap();

        let via_raw = reference.symdel_cross(["fizz", "fuzz", "buzz"], 2, true).unwrap();
        let via_cached = reference
            .symdel_cross_against_cached(&query, 2, true)
            .unwrap();

        assert_eq!(via_raw, via_cached);
    }
}
