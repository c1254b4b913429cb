mod encoding;


pub(crate) use encoding::Amf0EncoderState;

const NUMBER: u8 = 0x00;
const BOOLEAN: u8 = 0x01;
const STRING: u8 = 0x02;
const OBJECT: u8 = 0x03;
const NULL: u8 = 0x05;
const UNDEFINED: u8 = 0x06;
const ECMA_ARRAY: u8 = 0x08;
const STRICT_ARRAY: u8 = 0x0A;
const DATE: u8 = 0x0B;
const LONG_STRING: u8 = 0x0C;
const XML_DOC: u8 = 0x0F;
const TYPED_OBJECT: u8 = 0x10;

const OBJECT_END_MARKER: [u8; 3] = [0x00, 0x00, 0x09];

/// Remoting headers and messages don't announce their byte length.
const UNKNOWN_LENGTH: u32 = u32::MAX;
