use crate::AmfValue;

/// Header of an AMF0 remoting packet.
#[derive(Debug, Clone, PartialEq)]
pub struct AmfHeader {
    pub name: String,
    /// Receiver must reject the packet if it doesn't understand this header.
    pub must_understand: bool,
    pub value: AmfValue,
}

impl AmfHeader {
    pub fn new(name: impl Into<String>, must_understand: bool, value: impl Into<AmfValue>) -> Self {
        Self {
            name: name.into(),
            must_understand,
            value: value.into(),
        }
    }
}

/// Message (remote call) of an AMF0 remoting packet.
#[derive(Debug, Clone, PartialEq)]
pub struct AmfMessage {
    /// Service and method to call, e.g. `"service.method"`.
    pub target_uri: String,
    /// Where the response should be delivered, e.g. `"/1"`.
    pub response_uri: String,
    /// Call arguments, written as a strict array.
    pub body: Vec<AmfValue>,
}

impl AmfMessage {
    pub fn new(
        target_uri: impl Into<String>,
        response_uri: impl Into<String>,
        body: Vec<AmfValue>,
    ) -> Self {
        Self {
            target_uri: target_uri.into(),
            response_uri: response_uri.into(),
            body,
        }
    }
}
