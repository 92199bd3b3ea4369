//! The document tree (`w:document`)
//!
//! A deliberately small builder surface: a document owns a body, the body
//! owns paragraphs and an optional trailing section. Runs inside paragraphs
//! carry the actual content and styling (see [`crate::run`]).

use std::io::Write;

use crate::encode::WriteXml;
use crate::error::Result;
use crate::run::Run;
use crate::section::SectionProperties;

/// WordprocessingML main namespace
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// OfficeDocument relationships namespace (the `r:` prefix)
pub const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// The root of a WordprocessingML main part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Document body
    pub body: Body,
}

/// Document body: paragraphs followed by the final section's properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    /// Block content, in order
    pub paragraphs: Vec<Paragraph>,
    /// Page layout for the last (or only) section
    pub section: Option<SectionProperties>,
}

/// A paragraph of runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Runs, in order
    pub runs: Vec<Run>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty paragraph and return it for population
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.body.paragraphs.push(Paragraph::default());
        let index = self.body.paragraphs.len() - 1;
        &mut self.body.paragraphs[index]
    }
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run and return it for styling
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        let index = self.runs.len() - 1;
        &mut self.runs[index]
    }

    /// Append a plain text run and return it for styling
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Run {
        self.add_run(Run::text(text))
    }
}

impl WriteXml for Document {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(w, r#"<w:document xmlns:w="{WML_NS}" xmlns:r="{REL_NS}">"#)?;
        self.body.write_xml(w)?;
        w.write_all(b"</w:document>")?;
        Ok(())
    }
}

impl WriteXml for Body {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        w.write_all(b"<w:body>")?;
        for paragraph in &self.paragraphs {
            paragraph.write_xml(w)?;
        }
        if let Some(section) = &self.section {
            section.write_xml(w)?;
        }
        w.write_all(b"</w:body>")?;
        Ok(())
    }
}

impl WriteXml for Paragraph {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        if self.runs.is_empty() {
            w.write_all(b"<w:p/>")?;
            return Ok(());
        }
        w.write_all(b"<w:p>")?;
        for run in &self.runs {
            run.write_xml(w)?;
        }
        w.write_all(b"</w:p>")?;
        Ok(())
    }
}
