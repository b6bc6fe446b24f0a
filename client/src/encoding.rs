//! Request encoding
//!
//! Serializes a finished request for transmission. Both wire formats the
//! query protocol speaks are supported: protobuf (application/x-protobuf)
//! and JSON (application/json).

use prost::Message;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{DecodeError, EncodeError};

/// Content type for query requests/responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Protobuf,
    Json,
}

impl ContentType {
    /// Get the content type header value for requests
    #[inline]
    pub fn as_header_value(self) -> &'static str {
        match self {
            ContentType::Protobuf => "application/x-protobuf",
            ContentType::Json => "application/json",
        }
    }
}

/// Encode a request message based on content type
pub fn encode_request<T>(message: &T, content_type: ContentType) -> Result<Vec<u8>, EncodeError>
where
    T: Message + Serialize,
{
    match content_type {
        ContentType::Protobuf => Ok(message.encode_to_vec()),
        ContentType::Json => Ok(serde_json::to_vec(message)?),
    }
}

/// Decode a request message from bytes based on content type
pub fn decode_request<T>(bytes: &[u8], content_type: ContentType) -> Result<T, DecodeError>
where
    T: Message + Default + DeserializeOwned,
{
    match content_type {
        ContentType::Protobuf => Ok(T::decode(bytes)?),
        ContentType::Json => Ok(serde_json::from_slice(bytes)?),
    }
}
