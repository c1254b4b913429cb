mod encoding;


pub(crate) use encoding::Amf3EncoderState;

const UNDEFINED: u8 = 0x00;
const NULL: u8 = 0x01;
const FALSE: u8 = 0x02;
const TRUE: u8 = 0x03;
const INTEGER: u8 = 0x04;
const DOUBLE: u8 = 0x05;
const STRING: u8 = 0x06;
const XML_DOC: u8 = 0x07;
const DATE: u8 = 0x08;
const ARRAY: u8 = 0x09;
const OBJECT: u8 = 0x0A;
const XML: u8 = 0x0B;
const BYTE_ARRAY: u8 = 0x0C;

/// Inline traits of a dynamic object without sealed members.
const DYNAMIC_TRAITS: u8 = 0b1011;

/// Empty inline string: anonymous class name and end of dynamic members.
const EMPTY_STRING: u8 = 0x01;

/// `U29D` value marking an inline date.
const DATE_VALUE: u32 = 0x01;
