use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::FormatError;

/// AMF dialect written by an [`Encoder`](crate::Encoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmfFormat {
    /// Legacy dialect, used by remoting envelopes and RTMP commands.
    Amf0,
    /// Default dialect.
    #[default]
    Amf3,
}

impl AmfFormat {
    /// Numeric id of the dialect (`0` or `3`), as used by remoting endpoints.
    pub fn id(self) -> u8 {
        match self {
            AmfFormat::Amf0 => 0,
            AmfFormat::Amf3 => 3,
        }
    }
}

impl TryFrom<u8> for AmfFormat {
    type Error = FormatError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(AmfFormat::Amf0),
            3 => Ok(AmfFormat::Amf3),
            other => Err(FormatError::UnsupportedFormat(other)),
        }
    }
}

impl FromStr for AmfFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amf0" | "0" => Ok(AmfFormat::Amf0),
            "amf3" | "3" => Ok(AmfFormat::Amf3),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for AmfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmfFormat::Amf0 => write!(f, "AMF0"),
            AmfFormat::Amf3 => write!(f, "AMF3"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderConfig {
    /// (**default=`"amf3"`**) dialect used for every value written by the encoder.
    #[serde(default)]
    pub format: AmfFormat,
}
