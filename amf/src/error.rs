use thiserror::Error;

use crate::AmfFormat;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("Value of type {value_type} can't be encoded in {format}")]
    UnsupportedType {
        value_type: &'static str,
        format: AmfFormat,
    },

    #[error("String too long: {len} bytes (max {max})")]
    StringTooLong { len: usize, max: usize },

    #[error("Array too long: {len} elements (max {max})")]
    ArrayTooLong { len: usize, max: usize },

    #[error("Too many packet entries: {0} (max {})", u16::MAX)]
    TooManyEntries(usize),

    #[error("Empty property names are reserved for the end-of-object marker")]
    EmptyPropertyKey,

    #[error("Operation requires an {expected} encoder, but this encoder writes {actual}")]
    WrongFormat {
        expected: AmfFormat,
        actual: AmfFormat,
    },

    #[error("Value {0} does not fit in U29")]
    OutOfRangeU29(u32),

    #[error("Integer {0} is outside of the AMF3 integer range")]
    OutOfRangeInteger(i32),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Unsupported AMF format: {0}. Only 3 (AMF3) and 0 (AMF0) are supported.")]
    UnsupportedFormat(u8),

    #[error("Unknown AMF format name: {0:?}")]
    UnknownFormat(String),
}
