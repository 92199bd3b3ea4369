//! # docsmith-ooxml
//!
//! OOXML container assembly for docsmith.
//!
//! A DOCX file is a zip archive holding a fixed set of XML parts plus
//! embedded media. This crate packs a [`docsmith_wml::Document`] together
//! with its relationships, media blobs and a template's static boilerplate
//! into that container.
//!
//! ## Example
//!
//! ```no_run
//! use docsmith_ooxml::Package;
//!
//! let mut package = Package::new();
//! package.document.add_paragraph().add_text("Hello").bold();
//! package.save("hello.docx")?;
//! # Ok::<(), docsmith_ooxml::OoxmlError>(())
//! ```

pub mod error;
pub mod marshal;
pub mod media;
pub mod package;
pub mod relationships;
pub mod template;

pub use error::{OoxmlError, Result};
pub use marshal::{XmlPart, XML_DECLARATION};
pub use media::Media;
pub use package::{Package, DOCUMENT_PATH, DOCUMENT_RELS_PATH};
pub use relationships::{Relationship, Relationships, RELATIONSHIPS_NS};
pub use template::{Template, REQUIRED_PARTS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
