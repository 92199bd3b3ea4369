//! Error types for container assembly

use thiserror::Error;

/// Errors that can occur while assembling or writing an OOXML package
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Error reading or writing the ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error rendering a WordprocessingML part
    #[error("Document error: {0}")]
    Wml(#[from] docsmith_wml::WmlError),

    /// A required static part could not be located in the template source
    #[error("Required template part not found: {0}")]
    MissingTemplatePart(String),

    /// No built-in template with this name exists
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

/// Result type for container operations
pub type Result<T> = std::result::Result<T, OoxmlError>;
