//! Uploaded document → plain text.
//!
//! Narrow boundary: the rest of the pipeline only ever sees extracted text.
//! PDF goes through `pdf-extract`; plain text passes through. Anything else
//! is rejected up front rather than guessed at.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractTextError {
    #[error("unsupported document type: {0}")]
    UnsupportedFormat(String),

    #[error("could not read PDF text: {0}")]
    Pdf(String),

    #[error("document contains no extractable text")]
    Empty,
}

pub fn extract_text(bytes: &[u8], content_type: Option<&str>) -> Result<String, ExtractTextError> {
    let text = match content_type {
        Some("application/pdf") => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractTextError::Pdf(e.to_string()))?,
        Some(ct) if ct.starts_with("text/plain") => String::from_utf8_lossy(bytes).into_owned(),
        other => {
            return Err(ExtractTextError::UnsupportedFormat(
                other.unwrap_or("unknown").to_string(),
            ))
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractTextError::Empty);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text(b"  Jane Doe\nSoftware Engineer  ", Some("text/plain")).unwrap();
        assert_eq!(text, "Jane Doe\nSoftware Engineer");
    }

    #[test]
    fn test_plain_text_with_charset_parameter() {
        let text = extract_text(b"hello", Some("text/plain; charset=utf-8")).unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_docx_is_unsupported() {
        let mime = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
        let err = extract_text(b"...", Some(mime)).unwrap_err();
        assert!(matches!(err, ExtractTextError::UnsupportedFormat(m) if m == mime));
    }

    #[test]
    fn test_missing_content_type_is_unsupported() {
        let err = extract_text(b"...", None).unwrap_err();
        assert!(matches!(err, ExtractTextError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_whitespace_only_document_is_empty() {
        let err = extract_text(b"   \n\t ", Some("text/plain")).unwrap_err();
        assert!(matches!(err, ExtractTextError::Empty));
    }
}
