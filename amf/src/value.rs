use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;

/// Property that carries the class name of a typed object.
pub const FLEX_TYPE_KEY: &str = "$flexType";

/// Value that can be written by an [`Encoder`](crate::Encoder).
///
/// Numbers are kept as `f64`. Whether a number is written as an integer or as
/// a double is decided by the encoder, so `AmfValue::from(5)` and
/// `AmfValue::from(5.0)` always produce the same bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum AmfValue {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// Milliseconds since the Unix epoch, negative before 1970.
    Date(f64),
    Array(Vec<AmfValue>),
    Object(AmfObject),
    /// Serialized markup of an XML value (E4X `XML` in ActionScript).
    Xml(String),
    /// Serialized markup of a legacy `XMLDocument`.
    XmlDocument(String),
    /// Raw bytes, only representable in AMF3.
    ByteArray(Bytes),
}

impl AmfValue {
    pub fn byte_array(bytes: impl Into<Bytes>) -> Self {
        AmfValue::ByteArray(bytes.into())
    }

    /// Short human-readable name of the variant, used in errors and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            AmfValue::Undefined => "undefined",
            AmfValue::Null => "null",
            AmfValue::Boolean(_) => "boolean",
            AmfValue::Number(_) => "number",
            AmfValue::String(_) => "string",
            AmfValue::Date(_) => "date",
            AmfValue::Array(_) => "array",
            AmfValue::Object(_) => "object",
            AmfValue::Xml(_) => "xml",
            AmfValue::XmlDocument(_) => "xml document",
            AmfValue::ByteArray(_) => "byte array",
        }
    }
}

/// Object with an explicit property order.
///
/// Properties are written in insertion order. A class name turns the object
/// into a typed object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmfObject {
    class_name: Option<String>,
    properties: Vec<(String, AmfValue)>,
}

impl AmfObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typed(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            properties: Vec::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AmfValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a property. Keys are not deduplicated.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AmfValue>) {
        self.properties.push((key.into(), value.into()));
    }

    /// Class name, if the object is typed. An empty class name means anonymous.
    ///
    /// Without an explicit class name, a non-empty string `$flexType`
    /// property types the object.
    pub fn class_name(&self) -> Option<&str> {
        self.class_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.flex_type())
    }

    fn flex_type(&self) -> Option<&str> {
        self.properties.iter().find_map(|(key, value)| match value {
            AmfValue::String(name) if key == FLEX_TYPE_KEY && !name.is_empty() => {
                Some(name.as_str())
            }
            _ => None,
        })
    }

    pub fn properties(&self) -> &[(String, AmfValue)] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AmfObject
where
    K: Into<String>,
    V: Into<AmfValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            class_name: None,
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AmfValue {
                fn from(n: $t) -> Self {
                    AmfValue::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for AmfValue {
    fn from(b: bool) -> Self {
        AmfValue::Boolean(b)
    }
}

impl From<&str> for AmfValue {
    fn from(s: &str) -> Self {
        AmfValue::String(s.to_string())
    }
}

impl From<String> for AmfValue {
    fn from(s: String) -> Self {
        AmfValue::String(s)
    }
}

impl From<AmfObject> for AmfValue {
    fn from(obj: AmfObject) -> Self {
        AmfValue::Object(obj)
    }
}

impl From<Bytes> for AmfValue {
    fn from(bytes: Bytes) -> Self {
        AmfValue::ByteArray(bytes)
    }
}

impl<T: Into<AmfValue>> From<Vec<T>> for AmfValue {
    fn from(values: Vec<T>) -> Self {
        AmfValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<AmfValue>> From<Option<T>> for AmfValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AmfValue::Null, Into::into)
    }
}

impl From<SystemTime> for AmfValue {
    fn from(time: SystemTime) -> Self {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_millis() as f64,
            Err(before) => -(before.duration().as_millis() as f64),
        };
        AmfValue::Date(millis)
    }
}
