//! Variant index (spec component 4.2): a hash table from deletion-variant
//! bytes to the postings that produced them, built in parallel.

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::variant::{deletion_variants, VariantKey};

/// A `(string_index, deletion_depth)` record filed under a variant key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub index: u32,
    pub depth: u8,
}

/// Mapping from variant bytes to the postings that produced them. Key
/// equality is byte-exact; within a key's posting list, order is
/// chunk-deterministic (it depends on the parallel partitioning scheme, not
/// on string content or a single source's deletion order).
#[derive(Default)]
pub struct VariantIndex {
    table: HashMap<VariantKey, Vec<Posting>>,
}

impl VariantIndex {
    /// Builds an index over `strings`, generating deletion variants up to
    /// depth `k` for each. Work is sharded across a rayon thread pool: each
    /// shard builds a local table, and shards are merged pairwise.
    pub fn build(strings: &[Box<[u8]>], k: u8) -> Self {
        debug!(
            "building variant index over {} strings at depth {}",
            strings.len(),
            k
        );

        let table = strings
            .par_iter()
            .enumerate()
            .fold(HashMap::new, |mut local: HashMap<VariantKey, Vec<Posting>>, (i, s)| {
                for (variant, depth) in deletion_variants(s, k) {
                    local.entry(variant).or_default().push(Posting {
                        index: i as u32,
                        depth,
                    });
                }
                local
            })
            .reduce(HashMap::new, merge_tables);

        debug!("variant index built with {} keys", table.len());
        VariantIndex { table }
    }

    pub fn lookup(&self, variant: &[u8]) -> Option<&[Posting]> {
        self.table.get(variant).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&VariantKey, &[Posting])> {
        self.table.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

fn merge_tables(
    mut a: HashMap<VariantKey, Vec<Posting>>,
    b: HashMap<VariantKey, Vec<Posting>>,
) -> HashMap<VariantKey, Vec<Posting>> {
    if a.len() < b.len() {
        return merge_tables(b, a);
    }
    for (key, postings) in b {
        a.entry(key).or_default().extend(postings);
    }
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
    fn singleton_keys_are_retained() {
        let strings = boxed(&["unique"]);
        let index = VariantIndex::build(&strings, 1);
        assert!(index.lookup(b"unique").is_some());
    }

    #[test]
    fn empty_build_is_empty() {
        let index = VariantIndex::build(&[], 1);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);

        let strings = boxed(&["unique"]);
        let nonempty = VariantIndex::build(&strings, 1);
        assert!(!nonempty.is_empty());
    }

    #[test]
    fn shared_variant_collects_both_sources() {
        let strings = boxed(&["fizz", "fuzz"]);
        let index = VariantIndex::build(&strings, 1);
        // Deleting the differing vowel from either string yields "fzz".
        let postings = index.lookup(b"fzz").expect("shared variant missing");
        let indices: Vec<u32> = postings.iter().map(|p| p.index).collect();
        assert!(indices.contains(&0));
        assert!(indices.contains(&1));
    }

    #[test]
    fn depth_zero_variant_is_the_source_itself() {
        let strings = boxed(&["fizz"]);
        let index = VariantIndex::build(&strings, 2);
        let postings = index.lookup(b"fizz").unwrap();
        assert_eq!(postings, &[Posting { index: 0, depth: 0 }]);
    }
}
