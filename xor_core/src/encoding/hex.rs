use super::DecodingError;

/// Parse a hex encoded string into bytes
/// ```
/// use xor_core::encoding::parse_hex;
/// assert_eq!(parse_hex("1234").unwrap(), &[0x12, 0x34]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, DecodingError> {
    if input.len() % 2 != 0 {
        return Err(DecodingError::OddLength(input.len()));
    }

    input
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok(h2b(pair[0])? << 4 | h2b(pair[1])?))
        .collect()
}

/// Turn a slice of bytes into a hex encoded string
/// ```
/// use xor_core::encoding::to_hex;
/// assert_eq!(to_hex([0x12, 0x34, 0x56, 0x78]), "12345678");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut utf8 = Vec::with_capacity(input.len() * 2);
    utf8.extend(input.iter().copied().flat_map(b2h));

    // SAFETY: every character in the string is produced by b2h
    //         b2h uses a table of ASCII byte literals to encode
    //         its output, this means the bytes are always valid UTF-8
    unsafe { String::from_utf8_unchecked(utf8) }
}

/// Convert a byte from a hex digit to its value, accepting either case
fn h2b(b: u8) -> Result<u8, DecodingError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        x => Err(DecodingError::InvalidCharacter(x)),
    }
}

/// Convert a byte into the pair of hex digits encoding it, high nibble first
fn b2h(b: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(b >> 4) as usize];
    let lo = TABLE[(b & 0b1111) as usize];
    [hi, lo]
}
