//! Encoded payload and its textual encodings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// MIME type of every payload produced by this crate.
pub const JPEG_MIME: &str = "image/jpeg";

/// An immutable JPEG byte stream ready for upload.
///
/// Produced once per normalization pass; ownership transfers to the caller
/// and the bytes are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    bytes: Vec<u8>,
}

impl EncodedPayload {
    /// Wrap already-encoded JPEG bytes.
    pub fn from_jpeg_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw JPEG bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the payload, returning the JPEG bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode the payload as base64 text (standard alphabet, padded, no
    /// line wrapping).
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Render the payload as a `data:` URL suitable for an `image_url`
    /// entry in a multimodal completion request.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", JPEG_MIME, self.to_base64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_round_trip() {
        let payload = EncodedPayload::from_jpeg_bytes(vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let text = payload.to_base64();

        // Standard alphabet only, no line breaks
        assert!(text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
        assert!(!text.contains('\n'));

        let decoded = STANDARD.decode(&text).unwrap();
        assert_eq!(decoded, payload.as_bytes());
    }

    #[test]
    fn test_data_url_prefix() {
        let payload = EncodedPayload::from_jpeg_bytes(vec![1, 2, 3]);
        let url = payload.to_data_url();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert!(url.ends_with(&payload.to_base64()));
    }

    #[test]
    fn test_byte_accessors() {
        let payload = EncodedPayload::from_jpeg_bytes(vec![9, 8, 7]);
        assert_eq!(payload.len(), 3);
        assert!(!payload.is_empty());
        assert_eq!(payload.as_bytes(), &[9, 8, 7]);
        assert_eq!(payload.into_bytes(), vec![9, 8, 7]);
    }

    #[test]
    fn test_empty_payload() {
        let payload = EncodedPayload::from_jpeg_bytes(Vec::new());
        assert!(payload.is_empty());
        assert_eq!(payload.to_base64(), "");
    }
}
