mod hex;

pub use hex::{parse_hex, to_hex};

/// Error raised when a string cannot be decoded as hex
#[derive(Debug, Copy, Clone)]
pub enum DecodingError {
    /// the input length is not a multiple of two
    OddLength(usize),
    /// the input contains a byte outside the hex digit alphabet
    InvalidCharacter(u8),
}

impl std::fmt::Display for DecodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for DecodingError {}

/// Trait allowing us to use .encode_hex to encode bytes
pub trait Encodable {
    fn encode_hex(&self) -> String;
}

impl Encodable for [u8] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

/// Trait allowing us to use .decode_hex to decode strings
pub trait Decodable {
    type DecodeError;

    fn decode_hex(&self) -> Result<Vec<u8>, Self::DecodeError>;
}

impl Decodable for str {
    type DecodeError = DecodingError;

    fn decode_hex(&self) -> Result<Vec<u8>, Self::DecodeError> {
        parse_hex(self)
    }
}
