//! Encoder for the Action Message Format (AMF), in both its AMF0 and AMF3
//! dialects.
//!
//! Values are described with [`AmfValue`] and written with an [`Encoder`],
//! which owns the output buffer. Reference tables are not used: every string
//! and object is written out in full.

mod amf0;
mod amf3;
mod config;
mod encoder;
mod error;
mod packet;
mod primitives;
mod value;

pub use config::{AmfFormat, EncoderConfig};
pub use encoder::Encoder;
pub use error::{EncodingError, FormatError};
pub use packet::{AmfHeader, AmfMessage};
pub use value::{AmfObject, AmfValue, FLEX_TYPE_KEY};

#[cfg(test)]
mod pangrams;
