use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::{
    AmfFormat, AmfHeader, AmfMessage, AmfValue, EncoderConfig, EncodingError,
    amf0::Amf0EncoderState, amf3::Amf3EncoderState,
};

/// Serializes values into an in-memory AMF byte buffer.
///
/// The dialect is chosen at construction and never changes. Every write is
/// all-or-nothing: when it fails, the buffer is left exactly as it was before
/// the call.
///
/// ```
/// use amf::{AmfFormat, AmfValue, Encoder};
///
/// let mut encoder = Encoder::default();
/// encoder.write_object(&AmfValue::from(137)).unwrap();
/// assert_eq!(encoder.bytes(), [4, 129, 9]);
///
/// let mut encoder = Encoder::with_format(AmfFormat::Amf0);
/// encoder.write_object(&AmfValue::from(false)).unwrap();
/// assert_eq!(encoder.bytes(), [0x01, 0x00]);
/// ```
#[derive(Debug, Default)]
pub struct Encoder {
    format: AmfFormat,
    buf: BytesMut,
}

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self::with_format(config.format)
    }

    pub fn with_format(format: AmfFormat) -> Self {
        Self {
            format,
            buf: BytesMut::new(),
        }
    }

    pub fn format(&self) -> AmfFormat {
        self.format
    }

    /// Appends `value` encoded in the encoder's dialect.
    pub fn write_object(&mut self, value: &AmfValue) -> Result<(), EncodingError> {
        let format = self.format;
        self.atomic_write(|buf| match format {
            AmfFormat::Amf0 => Amf0EncoderState::new(buf).put_value(value),
            AmfFormat::Amf3 => Amf3EncoderState::new(buf).put_value(value),
        })
    }

    /// Appends an AMF3 byte array. Requires an AMF3 encoder.
    pub fn write_byte_array(&mut self, bytes: &[u8]) -> Result<(), EncodingError> {
        self.require_format(AmfFormat::Amf3)?;
        self.atomic_write(|buf| Amf3EncoderState::new(buf).put_byte_array(bytes))
    }

    /// Appends a legacy `XMLDocument` (marker `0x07`) instead of the `XML`
    /// type that [`write_object`](Self::write_object) uses for
    /// [`AmfValue::Xml`]. Requires an AMF3 encoder.
    pub fn write_xml_document(&mut self, markup: &str) -> Result<(), EncodingError> {
        self.require_format(AmfFormat::Amf3)?;
        self.atomic_write(|buf| Amf3EncoderState::new(buf).put_xml_doc(markup))
    }

    /// Appends a strict (dense) array instead of the ECMA array that
    /// [`write_object`](Self::write_object) uses. Requires an AMF0 encoder.
    pub fn write_strict_array(&mut self, values: &[AmfValue]) -> Result<(), EncodingError> {
        self.require_format(AmfFormat::Amf0)?;
        self.atomic_write(|buf| Amf0EncoderState::new(buf).put_strict_array(values))
    }

    /// Appends a complete remoting packet. Requires an AMF0 encoder.
    pub fn write_amf_packet(
        &mut self,
        headers: &[AmfHeader],
        messages: &[AmfMessage],
    ) -> Result<(), EncodingError> {
        self.require_format(AmfFormat::Amf0)?;
        self.atomic_write(|buf| Amf0EncoderState::new(buf).put_packet(headers, messages))?;
        debug!(
            headers = headers.len(),
            messages = messages.len(),
            "Wrote AMF packet"
        );
        Ok(())
    }

    /// Bytes written since construction or the last [`clear`](Self::clear).
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Owned copy of the current bytes. Later writes and `clear` never
    /// change a snapshot.
    pub fn snapshot(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    /// Takes the current bytes without copying and leaves an empty buffer.
    pub fn take_bytes(&mut self) -> Bytes {
        debug!(len = self.buf.len(), "Taking encoded bytes");
        self.buf.split().freeze()
    }

    /// Starts over with a newly allocated, empty buffer.
    pub fn clear(&mut self) {
        debug!(discarded = self.buf.len(), "Clearing encoder");
        self.buf = BytesMut::new();
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn require_format(&self, expected: AmfFormat) -> Result<(), EncodingError> {
        if self.format != expected {
            warn!(%expected, actual = %self.format, "Encoder used with the wrong AMF format");
            return Err(EncodingError::WrongFormat {
                expected,
                actual: self.format,
            });
        }
        Ok(())
    }

    fn atomic_write<F>(&mut self, write: F) -> Result<(), EncodingError>
    where
        F: FnOnce(&mut BytesMut) -> Result<(), EncodingError>,
    {
        let start = self.buf.len();
        let result = write(&mut self.buf);
        if result.is_err() {
            self.buf.truncate(start);
        }
        result
    }
}
