use bytes::BufMut;
use tracing::{trace, warn};

use crate::{
    AmfFormat, AmfHeader, AmfMessage, AmfObject, AmfValue, EncodingError,
    amf0::*,
    primitives::{check_array_len, check_string_len, put_double},
    value::FLEX_TYPE_KEY,
};

pub(crate) struct Amf0EncoderState<T> {
    pub(super) buf: T,
}

impl<T> Amf0EncoderState<T>
where
    T: BufMut,
{
    pub(crate) fn new(buf: T) -> Self {
        Self { buf }
    }

    pub(crate) fn put_value(&mut self, value: &AmfValue) -> Result<(), EncodingError> {
        trace!(value_type = value.type_name(), "Writing AMF0 value");
        match value {
            AmfValue::Undefined => self.put_undefined(),
            AmfValue::Null => self.put_null(),
            AmfValue::Boolean(b) => self.put_bool(*b),
            AmfValue::Number(n) => self.put_number(*n),
            AmfValue::String(s) => self.put_string(s)?,
            AmfValue::Date(millis) => self.put_date(*millis),
            AmfValue::Array(arr) => self.put_ecma_array(arr)?,
            AmfValue::Object(obj) => self.put_object(obj)?,
            AmfValue::Xml(x) | AmfValue::XmlDocument(x) => self.put_xml_doc(x)?,
            AmfValue::ByteArray(_) => {
                warn!("AMF0 has no byte array type, value can't be written to stream.");
                return Err(EncodingError::UnsupportedType {
                    value_type: value.type_name(),
                    format: AmfFormat::Amf0,
                });
            }
        };
        Ok(())
    }

    fn put_number(&mut self, n: f64) {
        self.buf.put_u8(NUMBER);
        put_double(&mut self.buf, n);
    }

    fn put_bool(&mut self, b: bool) {
        self.buf.put_u8(BOOLEAN);
        self.buf.put_u8(b.into());
    }

    fn put_null(&mut self) {
        self.buf.put_u8(NULL);
    }

    fn put_undefined(&mut self) {
        self.buf.put_u8(UNDEFINED);
    }

    fn put_string(&mut self, s: &str) -> Result<(), EncodingError> {
        if s.len() > u16::MAX as usize {
            return self.put_long_string(s);
        }
        self.buf.put_u8(STRING);
        self.put_string_raw(s)
    }

    fn put_long_string(&mut self, s: &str) -> Result<(), EncodingError> {
        check_string_len(s.len(), u32::MAX as usize)?;
        self.buf.put_u8(LONG_STRING);
        self.buf.put_u32(s.len() as u32);
        self.buf.put_slice(s.as_bytes());
        Ok(())
    }

    /// UTF-8 string with a 16-bit length and no marker.
    fn put_string_raw(&mut self, s: &str) -> Result<(), EncodingError> {
        check_string_len(s.len(), u16::MAX as usize)?;
        self.buf.put_u16(s.len() as u16);
        self.buf.put_slice(s.as_bytes());
        Ok(())
    }

    fn put_date(&mut self, millis: f64) {
        self.buf.put_u8(DATE);
        put_double(&mut self.buf, millis);
        // timezone is reserved and always zero
        self.buf.put_i16(0);
    }

    /// Arrays are written as ECMA arrays keyed by their stringified indices.
    fn put_ecma_array(&mut self, arr: &[AmfValue]) -> Result<(), EncodingError> {
        check_array_len(arr.len(), u32::MAX as usize)?;
        self.buf.put_u8(ECMA_ARRAY);
        self.buf.put_u32(arr.len() as u32);
        for (index, value) in arr.iter().enumerate() {
            self.put_string_raw(&index.to_string())?;
            self.put_value(value)?;
        }
        self.put_object_end();
        Ok(())
    }

    pub(crate) fn put_strict_array(&mut self, arr: &[AmfValue]) -> Result<(), EncodingError> {
        check_array_len(arr.len(), u32::MAX as usize)?;
        self.buf.put_u8(STRICT_ARRAY);
        self.buf.put_u32(arr.len() as u32);
        for value in arr {
            self.put_value(value)?;
        }
        Ok(())
    }

    fn put_object(&mut self, obj: &AmfObject) -> Result<(), EncodingError> {
        match obj.class_name() {
            Some(class_name) => {
                self.buf.put_u8(TYPED_OBJECT);
                self.put_string_raw(class_name)?;
            }
            None => self.buf.put_u8(OBJECT),
        }
        for (key, value) in obj.properties() {
            if obj.class_name().is_some() && key == FLEX_TYPE_KEY {
                continue;
            }
            self.put_property(key, value)?;
        }
        self.put_object_end();
        Ok(())
    }

    fn put_property(&mut self, key: &str, value: &AmfValue) -> Result<(), EncodingError> {
        if key.is_empty() {
            return Err(EncodingError::EmptyPropertyKey);
        }
        self.put_string_raw(key)?;
        self.put_value(value)
    }

    fn put_object_end(&mut self) {
        self.buf.put_slice(&OBJECT_END_MARKER);
    }

    fn put_xml_doc(&mut self, markup: &str) -> Result<(), EncodingError> {
        check_string_len(markup.len(), u32::MAX as usize)?;
        self.buf.put_u8(XML_DOC);
        // always a 32-bit length, even for short documents
        self.buf.put_u32(markup.len() as u32);
        self.buf.put_slice(markup.as_bytes());
        Ok(())
    }

    pub(crate) fn put_packet(
        &mut self,
        headers: &[AmfHeader],
        messages: &[AmfMessage],
    ) -> Result<(), EncodingError> {
        let header_count = entry_count(headers.len())?;
        let message_count = entry_count(messages.len())?;

        // packet version
        self.buf.put_u16(0);

        self.buf.put_u16(header_count);
        for header in headers {
            self.put_string_raw(&header.name)?;
            self.buf.put_u8(header.must_understand.into());
            self.buf.put_u32(UNKNOWN_LENGTH);
            self.put_value(&header.value)?;
        }

        self.buf.put_u16(message_count);
        for message in messages {
            self.put_string_raw(&message.target_uri)?;
            self.put_string_raw(&message.response_uri)?;
            self.buf.put_u32(UNKNOWN_LENGTH);
            self.put_strict_array(&message.body)?;
        }
        Ok(())
    }
}

fn entry_count(len: usize) -> Result<u16, EncodingError> {
    u16::try_from(len).map_err(|_| EncodingError::TooManyEntries(len))
}
