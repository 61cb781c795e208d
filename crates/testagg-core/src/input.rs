//! Gating of raw input before aggregation.

use crate::errors::InputError;

/// Accept `bytes` only if they look like text: valid UTF-8 with no NUL byte.
pub fn decode_text(bytes: Vec<u8>, source_name: &str) -> Result<String, InputError> {
    if bytes.contains(&0) {
        return Err(InputError::NotText {
            source_name: source_name.to_string(),
        });
    }
    String::from_utf8(bytes).map_err(|_| InputError::NotText {
        source_name: source_name.to_string(),
    })
}

/// Reject input that has nothing but whitespace.
pub fn ensure_non_empty(text: &str) -> Result<&str, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_text_accepted() {
        let text = decode_text(b"testStarted id=\"1\" name=\"A\"\n".to_vec(), "log.txt").unwrap();
        assert!(text.starts_with("testStarted"));
    }

    #[test]
    fn test_binary_rejected() {
        assert_eq!(
            decode_text(vec![0x89, b'P', b'N', b'G', 0, 0], "image.png"),
            Err(InputError::NotText {
                source_name: "image.png".into()
            })
        );
        assert!(decode_text(vec![0xff, 0xfe, 0xfd], "bad.txt").is_err());
    }

    #[test]
    fn test_nul_byte_message_is_neutral() {
        let err = decode_text(b"abc\0def".to_vec(), "dump.bin").unwrap_err();
        assert_eq!(
            err.to_string(),
            "only text input is allowed (dump.bin does not look like text)"
        );
    }

    #[test]
    fn test_blank_input_rejected() {
        assert_eq!(ensure_non_empty("  \n\t "), Err(InputError::Empty));
        assert!(ensure_non_empty("x").is_ok());
    }
}
