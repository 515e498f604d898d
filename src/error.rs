//! Error types for docx-tables library.

use std::io;
use thiserror::Error;

/// Result type alias for docx-tables operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting document tables.
///
/// Malformed property values never surface here: readers fall back to
/// inherited or documented defaults instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The XML input could not be parsed.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required element is missing from the document.
    #[error("Missing required element: {0}")]
    MissingElement(String),

    /// A paragraph inside a registered table has no converted block.
    #[error("No converted block recorded for paragraph {paragraph}")]
    MissingBlock {
        /// Debug description of the source paragraph
        paragraph: String,
    },

    /// A converted block is not attached to the output tree.
    #[error("Converted block for paragraph {paragraph} is not attached to the output tree")]
    DetachedBlock {
        /// Debug description of the source paragraph
        paragraph: String,
    },

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingElement("w:body".to_string());
        assert_eq!(err.to_string(), "Missing required element: w:body");

        let err = Error::MissingBlock {
            paragraph: "NodeId(7)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No converted block recorded for paragraph NodeId(7)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_xml_error_conversion() {
        let err: Error = roxmltree::Document::parse("<unclosed>").unwrap_err().into();
        assert!(matches!(err, Error::Xml(_)));
    }
}
