/// Error raised when combining blocks of differing lengths
#[derive(Debug, Copy, Clone)]
pub enum XorError {
    LengthMismatch(usize, usize),
}

impl std::fmt::Display for XorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self::LengthMismatch(a, b) = self;
        write!(f, "Mismatch in block length: {a} != {b}")
    }
}

impl std::error::Error for XorError {}

/// XOR two blocks of data together
/// ```
/// use xor_core::xor::xor_blocks;
/// assert_eq!(xor_blocks("abc", "def").unwrap(), [5, 7, 5]);
/// ```
pub fn xor_blocks(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> Result<Vec<u8>, XorError> {
    let a = a.as_ref();
    let b = b.as_ref();

    // ensure we have the same length blocks
    if a.len() != b.len() {
        return Err(XorError::LengthMismatch(a.len(), b.len()));
    }

    let xorred = a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect();

    Ok(xorred)
}

/// XOR two blocks of data, writing the result into an output buffer
///
/// `out` is resized to the block length, discarding any prior contents.
/// ```
/// use xor_core::xor::xor_blocks_into;
/// let mut out = Vec::new();
/// assert!(xor_blocks_into("abc", "def", &mut out).is_ok());
/// assert_eq!(out, [5, 7, 5]);
/// ```
pub fn xor_blocks_into(
    a: impl AsRef<[u8]>,
    b: impl AsRef<[u8]>,
    out: &mut Vec<u8>,
) -> Result<(), XorError> {
    let a = a.as_ref();
    let b = b.as_ref();

    // ensure we have the same length blocks
    if a.len() != b.len() {
        return Err(XorError::LengthMismatch(a.len(), b.len()));
    }

    out.clear();
    out.extend(a.iter().zip(b.iter()).map(|(x, y)| x ^ y));

    Ok(())
}

/// XOR two blocks of data, writing the result into the second block
/// ```
/// use xor_core::xor::xor_blocks_together;
/// let mut out = b"def".to_vec();
/// assert!(xor_blocks_together("abc", out.as_mut_slice()).is_ok());
/// assert_eq!(out, [5, 7, 5]);
/// ```
pub fn xor_blocks_together(a: impl AsRef<[u8]>, b: &mut [u8]) -> Result<(), XorError> {
    let a = a.as_ref();

    // ensure we have the same length blocks
    if a.len() != b.len() {
        return Err(XorError::LengthMismatch(a.len(), b.len()));
    }

    for (x, y) in a.iter().zip(b.iter_mut()) {
        *y ^= *x;
    }

    Ok(())
}
