//! Input normalization: validate that every string is 7-bit ASCII and
//! materialize it as an owned byte buffer.

use crate::error::SymdelError;

/// Validates that `s` contains only bytes `<= 0x7F`, returning the offending
/// byte and its position as a [`SymdelError::NonAsciiByte`] otherwise.
pub fn validate_ascii(string_index: usize, s: &str) -> Result<(), SymdelError> {
    for (byte_index, &byte) in s.as_bytes().iter().enumerate() {
        if byte > 0x7F {
            return Err(SymdelError::NonAsciiByte {
                string_index,
                byte_index,
                byte,
            });
        }
    }
    Ok(())
}

/// Validates and materializes a sequence of strings into an owned byte buffer.
///
/// Fails fast on the first non-ASCII byte encountered, identifying the
/// offending string and byte position, with no partial output produced.
pub fn normalize<I, S>(strings: I) -> Result<Vec<Box<[u8]>>, SymdelError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    strings
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let s = s.as_ref();
            validate_ascii(i, s)?;
            Ok(s.as_bytes().to_vec().into_boxed_slice())
        })
        .collect()
}
