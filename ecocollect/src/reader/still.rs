//! Still-image decoding, off the live scan path.

use tracing::debug;

use super::types::{CodeDecoder, Frame, ReaderError};

/// Decode a code payload from a user-supplied still image.
///
/// The bytes are parsed as an encoded image (PNG, JPEG, ...), flattened to
/// an 8-bit luma raster, and handed to the decoder once. No camera is
/// involved.
///
/// # Errors
///
/// - [`ReaderError::DecoderUnavailable`] when the decode library is not
///   usable; callers should disable the upload path as well
/// - [`ReaderError::InvalidImage`] when the bytes are not a readable image
/// - [`ReaderError::NoCodeFound`] when the image holds no readable code
pub fn decode_still_image(decoder: &dyn CodeDecoder, bytes: &[u8]) -> Result<String, ReaderError> {
    if !decoder.ready() {
        return Err(ReaderError::DecoderUnavailable(decoder.name().to_string()));
    }

    let image =
        image::load_from_memory(bytes).map_err(|e| ReaderError::InvalidImage(e.to_string()))?;
    let luma = image.to_luma8();
    let frame = Frame::new(luma.width(), luma.height(), luma.into_raw());

    debug!(
        width = frame.width(),
        height = frame.height(),
        decoder = decoder.name(),
        "Decoding still image"
    );
    decoder.decode(&frame).ok_or(ReaderError::NoCodeFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::scripted::{TextPayloadDecoder, UnavailableDecoder};
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    /// PNG-encode a single-row luma image spelling out `payload`.
    fn png_with_payload(payload: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                payload.as_bytes(),
                payload.len() as u32,
                1,
                ExtendedColorType::L8,
            )
            .expect("PNG encoding failed");
        bytes
    }

    #[test]
    fn test_decodes_payload_from_png() {
        let bytes = png_with_payload("ECO-STOP-002");
        let payload = decode_still_image(&TextPayloadDecoder, &bytes).unwrap();
        assert_eq!(payload, "ECO-STOP-002");
    }

    #[test]
    fn test_image_without_code_reports_no_code_found() {
        // A 2-row image is noise to the text decoder.
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(&[0u8; 16], 8, 2, ExtendedColorType::L8)
            .unwrap();

        let err = decode_still_image(&TextPayloadDecoder, &bytes).unwrap_err();
        assert_eq!(err, ReaderError::NoCodeFound);
    }

    #[test]
    fn test_garbage_bytes_report_invalid_image() {
        let err = decode_still_image(&TextPayloadDecoder, b"not an image").unwrap_err();
        assert!(matches!(err, ReaderError::InvalidImage(_)));
    }

    #[test]
    fn test_unavailable_decoder_is_reported_distinctly() {
        let bytes = png_with_payload("ECO-STOP-002");
        let err = decode_still_image(&UnavailableDecoder, &bytes).unwrap_err();
        assert!(matches!(err, ReaderError::DecoderUnavailable(_)));
    }
}
