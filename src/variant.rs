//! Deletion-variant generator (spec component 4.1).
//!
//! For a string `s` and a maximum depth `k`, emits every distinct byte
//! sequence obtainable by deleting `0..=min(k, |s|)` positions from `s`,
//! paired with the smallest deletion depth that produces it.

use smallvec::SmallVec;

/// Inline storage for a deletion variant. Most CDR3-scale inputs produce
/// variants well under 32 bytes, so this avoids a heap allocation per variant
/// in the common case.
pub type VariantKey = SmallVec<[u8; 32]>;

/// Emits `(variant, depth)` pairs for `s`, deduplicated per source string:
/// if two deletion patterns yield the same bytes, only the occurrence with
/// the smallest depth is kept. The depth-0 pair `(s, 0)` is always emitted.
pub fn deletion_variants(s: &[u8], k: u8) -> Vec<(VariantKey, u8)> {
    let max_depth = (k as usize).min(s.len());
    let mut out = Vec::new();
    let mut seen: std::collections::HashSet<VariantKey> = std::collections::HashSet::new();

    let base: VariantKey = SmallVec::from_slice(s);
    seen.insert(base.clone());
    out.push((base, 0u8));

    let mut positions: Vec<usize> = Vec::with_capacity(max_depth);
    for depth in 1..=max_depth {
        emit_combinations(s, depth, 0, &mut positions, &mut seen, &mut out);
    }
    out
}

/// Recursively chooses `remaining` positions (in strictly increasing order,
/// starting no earlier than `start`) to delete from `s`, emitting the
/// resulting variant once all positions for this combination are chosen.
/// Choosing positions in increasing order, rather than deleting left-to-right
/// from intermediate variants, visits each combination of deleted indices
/// exactly once.
fn emit_combinations(
    s: &[u8],
    remaining: usize,
    start: usize,
    positions: &mut Vec<usize>,
    seen: &mut std::collections::HashSet<VariantKey>,
    out: &mut Vec<(VariantKey, u8)>,
) {
    if remaining == 0 {
        let variant = build_variant(s, positions);
        if seen.insert(variant.clone()) {
            out.push((variant, positions.len() as u8));
        }
        return;
    }
    // Need at least `remaining` more slots before running out of string.
    let last_start = s.len().saturating_sub(remaining);
    for pos in start..=last_start {
        positions.push(pos);
        emit_combinations(s, remaining - 1, pos + 1, positions, seen, out);
        positions.pop();
    }
}

fn build_variant(s: &[u8], deleted: &[usize]) -> VariantKey {
    let mut variant = VariantKey::with_capacity(s.len() - deleted.len());
    let mut next_deleted = deleted.iter().copied().peekable();
    for (i, &b) in s.iter().enumerate() {
        if next_deleted.peek() == Some(&i) {
            next_deleted.next();
            continue;
        }
        variant.push(b);
    }
    variant
}
