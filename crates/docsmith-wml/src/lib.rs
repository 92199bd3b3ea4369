//! # docsmith-wml
//!
//! WordprocessingML element model for docsmith.
//!
//! This crate provides:
//! - A document tree (document/body/paragraph/run) with a fluent run-styling
//!   API
//! - The section-properties model with a tolerant decoder for real-world
//!   documents
//! - Streaming XML rendering through the [`WriteXml`] trait
//!
//! ## Example
//!
//! ```
//! use docsmith_wml::{Document, SectionProperties, PageSize};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph().add_text("Hello").bold().color("2E74B5");
//!
//! let mut section = SectionProperties::new();
//! section.page_size = Some(PageSize { width: 11906, height: 16838 });
//! doc.body.section = Some(section);
//! ```

pub mod document;
pub mod encode;
pub mod error;
pub mod run;
pub mod section;

pub use document::{Body, Document, Paragraph, REL_NS, WML_NS};
pub use encode::{escape_xml, WriteXml};
pub use error::{Result, WmlError};
pub use run::{Run, RunChild, RunProperties, Shading};
pub use section::{
    Columns, DocGrid, FooterReference, HeaderReference, PageMargins, PageSize,
    SectionProperties, SectionType,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
