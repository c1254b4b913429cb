use bytes::BufMut;
use tracing::trace;

use crate::{
    AmfObject, AmfValue, EncodingError,
    amf3::*,
    primitives::{
        U28_MAX, as_i29, check_array_len, check_string_len, put_double, put_i29, put_inline_len,
        put_u29,
    },
    value::FLEX_TYPE_KEY,
};

pub(crate) struct Amf3EncoderState<T> {
    pub(super) buf: T,
}

impl<T> Amf3EncoderState<T>
where
    T: BufMut,
{
    pub(crate) fn new(buf: T) -> Self {
        Self { buf }
    }

    pub(crate) fn put_value(&mut self, value: &AmfValue) -> Result<(), EncodingError> {
        trace!(value_type = value.type_name(), "Writing AMF3 value");
        match value {
            AmfValue::Undefined => self.put_marker(UNDEFINED),
            AmfValue::Null => self.put_marker(NULL),
            AmfValue::Boolean(b) => self.put_boolean(*b),
            AmfValue::Number(n) => self.put_number(*n)?,
            AmfValue::String(s) => self.put_string(s)?,
            AmfValue::Date(millis) => self.put_date(*millis)?,
            AmfValue::Array(dense) => self.put_array(dense)?,
            AmfValue::Object(obj) => self.put_object(obj)?,
            AmfValue::Xml(x) => self.put_xml_with_marker(XML, x)?,
            AmfValue::XmlDocument(xd) => self.put_xml_doc(xd)?,
            AmfValue::ByteArray(ba) => self.put_byte_array(ba)?,
        }
        Ok(())
    }

    fn put_marker(&mut self, marker: u8) {
        self.buf.put_u8(marker);
    }

    fn put_boolean(&mut self, b: bool) {
        match b {
            false => self.put_marker(FALSE),
            true => self.put_marker(TRUE),
        }
    }

    fn put_number(&mut self, n: f64) -> Result<(), EncodingError> {
        match as_i29(n) {
            Some(i29) => {
                self.put_marker(INTEGER);
                put_i29(&mut self.buf, i29)
            }
            None => {
                self.put_marker(DOUBLE);
                put_double(&mut self.buf, n);
                Ok(())
            }
        }
    }

    fn put_string(&mut self, s: &str) -> Result<(), EncodingError> {
        check_string_len(s.len(), U28_MAX as usize)?;
        self.put_marker(STRING);
        self.put_string_raw(s)
    }

    /// String without a marker, as used for property names and class names.
    fn put_string_raw(&mut self, s: &str) -> Result<(), EncodingError> {
        check_string_len(s.len(), U28_MAX as usize)?;
        put_inline_len(&mut self.buf, s.len())?;
        self.buf.put_slice(s.as_bytes());
        Ok(())
    }

    pub(crate) fn put_xml_doc(&mut self, xd: &str) -> Result<(), EncodingError> {
        self.put_xml_with_marker(XML_DOC, xd)
    }

    fn put_xml_with_marker(&mut self, marker: u8, markup: &str) -> Result<(), EncodingError> {
        check_string_len(markup.len(), U28_MAX as usize)?;
        self.put_marker(marker);
        self.put_string_raw(markup)
    }

    fn put_date(&mut self, millis: f64) -> Result<(), EncodingError> {
        self.put_marker(DATE);

        // Only the "value, not a reference" flag is meaningful here, so the
        // whole U29D fits in one byte.
        put_u29(&mut self.buf, DATE_VALUE)?;
        put_double(&mut self.buf, millis);
        Ok(())
    }

    fn put_array(&mut self, dense: &[AmfValue]) -> Result<(), EncodingError> {
        check_array_len(dense.len(), U28_MAX as usize)?;

        self.put_marker(ARRAY);
        put_inline_len(&mut self.buf, dense.len())?;
        // no associative part
        self.buf.put_u8(EMPTY_STRING);
        for value in dense {
            self.put_value(value)?;
        }
        Ok(())
    }

    fn put_object(&mut self, obj: &AmfObject) -> Result<(), EncodingError> {
        self.put_marker(OBJECT);
        self.buf.put_u8(DYNAMIC_TRAITS);
        self.buf.put_u8(EMPTY_STRING);

        // Traits stay anonymous, the class name travels as a dynamic member.
        if let Some(class_name) = obj.class_name() {
            self.put_string_raw(FLEX_TYPE_KEY)?;
            self.put_string(class_name)?;
        }

        for (key, value) in obj.properties() {
            if key.is_empty() {
                return Err(EncodingError::EmptyPropertyKey);
            }
            if obj.class_name().is_some() && key == FLEX_TYPE_KEY {
                continue;
            }
            self.put_string_raw(key)?;
            self.put_value(value)?;
        }
        self.buf.put_u8(EMPTY_STRING);
        Ok(())
    }

    pub(crate) fn put_byte_array(&mut self, ba: &[u8]) -> Result<(), EncodingError> {
        check_array_len(ba.len(), U28_MAX as usize)?;

        self.put_marker(BYTE_ARRAY);
        put_inline_len(&mut self.buf, ba.len())?;
        self.buf.put_slice(ba);
        Ok(())
    }
}
