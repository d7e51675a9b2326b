use thiserror::Error;

/// Errors surfaced to callers of the symdel engine.
///
/// Every variant corresponds to one of the error kinds named in the engine's
/// design: bad input encoding, bad configuration, or (documented only, see
/// below) resource exhaustion. No variant is recovered internally; all are
/// returned to the caller unchanged.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SymdelError {
    /// A string contained a byte outside the 7-bit ASCII range.
    #[error("string at index {string_index} contains a non-ASCII byte 0x{byte:02x} at position {byte_index}")]
    NonAsciiByte {
        string_index: usize,
        byte_index: usize,
        byte: u8,
    },

    /// A per-call distance bound exceeded the bound a cached index was built for.
    #[error("requested distance {requested} exceeds cache bound {max}")]
    DistanceExceedsCache { requested: u8, max: u8 },

    /// Two cached handles were joined against each other but were built with
    /// different `k_max` bounds.
    #[error("cached handles have mismatched bounds: {left_max} vs {right_max}")]
    MismatchedCacheBound { left_max: u8, right_max: u8 },
}

pub type Result<T> = std::result::Result<T, SymdelError>;
