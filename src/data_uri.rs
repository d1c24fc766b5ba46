//! Base64 data URIs for inlined assets

use std::fmt;

use base64::{Engine as _, engine::general_purpose};

/// MIME type of the inlined logo
pub const PNG_MIME: &str = "image/png";

/// Encode bytes with the standard RFC 4648 alphabet, padded, no line wrapping
pub fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// A `data:<mime>;base64,<payload>` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    mime: String,
    payload: String,
}

impl DataUri {
    pub fn new(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            payload: encode_base64(bytes),
        }
    }

    /// Data URI for PNG content. The bytes are not checked to be a PNG.
    pub fn png(bytes: &[u8]) -> Self {
        Self::new(PNG_MIME, bytes)
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_magic_prefix() {
        assert_eq!(encode_base64(&[0x89, 0x50, 0x4E, 0x47]), "iVBORw==");
    }

    #[test]
    fn test_empty_input_encodes_to_empty_string() {
        assert_eq!(encode_base64(&[]), "");
        assert_eq!(DataUri::png(&[]).to_string(), "data:image/png;base64,");
    }

    #[test]
    fn test_png_data_uri_display() {
        let uri = DataUri::png(&[0x89, 0x50, 0x4E, 0x47]);
        assert_eq!(uri.mime(), "image/png");
        assert_eq!(uri.payload(), "iVBORw==");
        assert_eq!(uri.to_string(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_uses_standard_alphabet_with_padding() {
        // 0xfb 0xff encodes to characters outside the url-safe alphabet
        assert_eq!(encode_base64(&[0xfb, 0xff]), "+/8=");
    }

    #[test]
    fn test_long_payload_is_not_wrapped() {
        let bytes = vec![0xAB; 1024];
        let encoded = encode_base64(&bytes);
        assert!(!encoded.contains('\n'));
        assert_eq!(encoded.len(), 1368);
    }

    #[test]
    fn test_payload_decodes_to_input() {
        let bytes: Vec<u8> = (0..=255).collect();
        let uri = DataUri::png(&bytes);
        assert_eq!(general_purpose::STANDARD.decode(uri.payload()).unwrap(), bytes);
    }

    #[test]
    fn test_custom_mime() {
        let uri = DataUri::new("image/svg+xml", b"<svg/>");
        assert_eq!(uri.to_string(), "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
