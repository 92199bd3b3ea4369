//! Error types for WordprocessingML operations

use thiserror::Error;

/// Errors that can occur while decoding or rendering WordprocessingML
#[derive(Error, Debug)]
pub enum WmlError {
    /// Error from the underlying XML reader
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error writing rendered XML to the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric attribute contained non-numeric text
    #[error("malformed attribute {attribute}=\"{value}\" on <{element}>: {source}")]
    MalformedAttribute {
        /// Local name of the element carrying the attribute
        element: &'static str,
        /// Local name of the attribute
        attribute: &'static str,
        /// The raw attribute text that failed to parse
        value: String,
        /// The underlying parse failure
        source: std::num::ParseIntError,
    },

    /// A recognized element carried content its schema shape does not allow
    ///
    /// This is the only recoverable kind: a tolerant decode loop keeps the
    /// attributes it already read and resumes at the next sibling.
    #[error("unexpected content inside <{element}>")]
    ElementShape {
        /// Name of the element whose shape did not match
        element: String,
    },

    /// Input ended before the element's end tag was seen
    #[error("unexpected end of input inside <{element}>")]
    UnexpectedEof {
        /// Name of the element left open
        element: String,
    },
}

impl WmlError {
    /// Whether a tolerant decode loop may continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WmlError::ElementShape { .. })
    }
}

/// Result type for WordprocessingML operations
pub type Result<T> = std::result::Result<T, WmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_shape_errors_are_recoverable() {
        let shape = WmlError::ElementShape {
            element: "pgMar".to_string(),
        };
        assert!(shape.is_recoverable());

        let eof = WmlError::UnexpectedEof {
            element: "pgMar".to_string(),
        };
        assert!(!eof.is_recoverable());

        let malformed = WmlError::MalformedAttribute {
            element: "pgSz",
            attribute: "w",
            value: "abc".to_string(),
            source: "abc".parse::<u64>().unwrap_err(),
        };
        assert!(!malformed.is_recoverable());
    }

    #[test]
    fn test_malformed_attribute_message_names_the_attribute() {
        let err = WmlError::MalformedAttribute {
            element: "pgSz",
            attribute: "h",
            value: "tall".to_string(),
            source: "tall".parse::<u64>().unwrap_err(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pgSz"));
        assert!(msg.contains("h=\"tall\""));
    }
}
