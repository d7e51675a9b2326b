//! symdel — symmetric-deletion nearest-neighbour search over short ASCII
//! strings under a bounded Levenshtein distance.
//!
//! Rather than comparing every pair of strings directly (`O(N^2)`), symdel
//! enumerates every deletion variant of every string up to depth `k`, groups
//! strings that share a variant, and verifies each resulting candidate pair
//! by exact edit-distance computation. See [`symdel_within`] and
//! [`symdel_cross`] for one-shot queries, and [`CachedSymdel`] for repeated
//! queries against a fixed reference set.
//!
//! ```
//! use symdel::symdel_within;
//!
//! let result = symdel_within(["fizz", "fuzz", "buzz"], 1, true).unwrap();
//! let pairs: Vec<(u64, u64, u8)> =
//!     result.into_iter().map(|m| (m.i, m.j, m.distance)).collect();
//! assert_eq!(pairs, vec![(0, 1, 1), (1, 2, 1)]);
//! ```

mod ascii;
mod cached;
mod config;
mod error;
mod index;
mod join;
mod result;
mod variant;
mod verify;

pub use cached::CachedSymdel;
pub use config::SymdelConfig;
pub use error::{Result, SymdelError};
pub use result::Match;

use ascii::normalize;
use index::VariantIndex;
use join::{cross_candidates, within_candidates};
use result::{assemble, verify_candidates};

/// Finds all pairs within `strings` whose Levenshtein distance is `<= k`,
/// using the default thread pool configuration.
pub fn symdel_within<I, S>(strings: I, k: u8, zero_index: bool) -> Result<Vec<Match>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symdel_within_with_config(strings, k, zero_index, &SymdelConfig::default())
}

/// As [`symdel_within`], with an explicit [`SymdelConfig`].
pub fn symdel_within_with_config<I, S>(
    strings: I,
    k: u8,
    zero_index: bool,
    config: &SymdelConfig,
) -> Result<Vec<Match>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let strings = normalize(strings)?;
    let triplets = config.scoped(|| {
        let index = VariantIndex::build(&strings, k);
        let candidates = within_candidates(&index);
        verify_candidates(&strings, &strings, &candidates, k)
    });
    Ok(assemble(triplets, zero_index))
}

/// Finds all pairs `(q, r)` with `q` from `query`, `r` from `reference`,
/// whose Levenshtein distance is `<= k`, using the default thread pool
/// configuration.
pub fn symdel_cross<Q, R, SQ, SR>(
    query: Q,
    reference: R,
    k: u8,
    zero_index: bool,
) -> Result<Vec<Match>>
where
    Q: IntoIterator<Item = SQ>,
    SQ: AsRef<str>,
    R: IntoIterator<Item = SR>,
    SR: AsRef<str>,
{
    symdel_cross_with_config(query, reference, k, zero_index, &SymdelConfig::default())
}

/// As [`symdel_cross`], with an explicit [`SymdelConfig`].
pub fn symdel_cross_with_config<Q, R, SQ, SR>(
    query: Q,
    reference: R,
    k: u8,
    zero_index: bool,
    config: &SymdelConfig,
) -> Result<Vec<Match>>
where
    Q: IntoIterator<Item = SQ>,
    SQ: AsRef<str>,
    R: IntoIterator<Item = SR>,
    SR: AsRef<str>,
{
    let query = normalize(query)?;
    let reference = normalize(reference)?;
    let triplets = config.scoped(|| {
        let query_index = VariantIndex::build(&query, k);
        let reference_index = VariantIndex::build(&reference, k);
        let candidates = cross_candidates(&query_index, &reference_index);
        verify_candidates(&query, &reference, &candidates, k)
    });
    Ok(assemble(triplets, zero_index))
}
