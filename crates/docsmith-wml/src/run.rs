//! Runs and character-level formatting
//!
//! A run is the smallest styled unit of text. Styling goes through fluent
//! mutators that replace the matching property wholesale and hand the run
//! back for chaining; no argument validation happens at this layer (color
//! codes, size units and highlight names are a contract with the consumer).

use std::io::Write;

use crate::encode::{escape_xml, WriteXml};
use crate::error::Result;

/// A unit of styled text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// Character formatting for the whole run
    pub properties: RunProperties,
    /// Ordered run content
    pub children: Vec<RunChild>,
}

/// Content items a run can hold, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunChild {
    /// Literal text (`w:t`, rendered with `xml:space="preserve"`)
    Text(String),
    /// A tab character (`w:tab`)
    Tab,
    /// A line break (`w:br`)
    Break,
}

/// Character formatting (`w:rPr`)
///
/// Every field is independently present or absent. Bold and italic are
/// presence flags: there is no "off" distinct from absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProperties {
    /// Text color (`w:color`)
    pub color: Option<String>,
    /// Font size in half-points (`w:sz`)
    pub size: Option<String>,
    /// Background shading (`w:shd`)
    pub shade: Option<Shading>,
    /// Bold flag (`w:b`)
    pub bold: bool,
    /// Italic flag (`w:i`)
    pub italic: bool,
    /// Underline style (`w:u`)
    pub underline: Option<String>,
    /// Highlight color name (`w:highlight`)
    pub highlight: Option<String>,
}

/// Shading pattern, color and fill (`w:shd`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shading {
    /// Shading pattern (`w:val`)
    pub value: String,
    /// Pattern color (`w:color`)
    pub color: String,
    /// Fill color (`w:fill`)
    pub fill: String,
}

impl RunProperties {
    /// Whether no formatting is set (the `w:rPr` element is then omitted)
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.size.is_none()
            && self.shade.is_none()
            && !self.bold
            && !self.italic
            && self.underline.is_none()
            && self.highlight.is_none()
    }
}

impl Run {
    /// Create an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a run holding one text item
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            properties: RunProperties::default(),
            children: vec![RunChild::Text(text.into())],
        }
    }

    /// Set the run color
    pub fn color(&mut self, value: impl Into<String>) -> &mut Self {
        self.properties.color = Some(value.into());
        self
    }

    /// Set the font size
    pub fn size(&mut self, value: impl Into<String>) -> &mut Self {
        self.properties.size = Some(value.into());
        self
    }

    /// Set the run shading
    pub fn shade(
        &mut self,
        value: impl Into<String>,
        color: impl Into<String>,
        fill: impl Into<String>,
    ) -> &mut Self {
        self.properties.shade = Some(Shading {
            value: value.into(),
            color: color.into(),
            fill: fill.into(),
        });
        self
    }

    /// Mark the run bold
    pub fn bold(&mut self) -> &mut Self {
        self.properties.bold = true;
        self
    }

    /// Mark the run italic
    pub fn italic(&mut self) -> &mut Self {
        self.properties.italic = true;
        self
    }

    /// Set the underline style
    pub fn underline(&mut self, value: impl Into<String>) -> &mut Self {
        self.properties.underline = Some(value.into());
        self
    }

    /// Set the highlight color
    pub fn highlight(&mut self, value: impl Into<String>) -> &mut Self {
        self.properties.highlight = Some(value.into());
        self
    }

    /// Append a tab to the run content
    pub fn add_tab(&mut self) -> &mut Self {
        self.children.push(RunChild::Tab);
        self
    }

    /// Append a line break to the run content
    pub fn add_break(&mut self) -> &mut Self {
        self.children.push(RunChild::Break);
        self
    }

    /// Append a text item to the run content
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.children.push(RunChild::Text(text.into()));
        self
    }
}

impl WriteXml for Run {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        w.write_all(b"<w:r>")?;
        if !self.properties.is_empty() {
            self.properties.write_xml(w)?;
        }
        for child in &self.children {
            match child {
                RunChild::Text(text) => {
                    write!(
                        w,
                        r#"<w:t xml:space="preserve">{}</w:t>"#,
                        escape_xml(text)
                    )?;
                }
                RunChild::Tab => w.write_all(b"<w:tab/>")?,
                RunChild::Break => w.write_all(b"<w:br/>")?,
            }
        }
        w.write_all(b"</w:r>")?;
        Ok(())
    }
}

impl WriteXml for RunProperties {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        w.write_all(b"<w:rPr>")?;
        if self.bold {
            w.write_all(b"<w:b/>")?;
        }
        if self.italic {
            w.write_all(b"<w:i/>")?;
        }
        if let Some(color) = &self.color {
            write!(w, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
        }
        if let Some(size) = &self.size {
            write!(w, r#"<w:sz w:val="{}"/>"#, escape_xml(size))?;
        }
        if let Some(underline) = &self.underline {
            write!(w, r#"<w:u w:val="{}"/>"#, escape_xml(underline))?;
        }
        if let Some(highlight) = &self.highlight {
            write!(w, r#"<w:highlight w:val="{}"/>"#, escape_xml(highlight))?;
        }
        if let Some(shade) = &self.shade {
            write!(
                w,
                r#"<w:shd w:val="{}" w:color="{}" w:fill="{}"/>"#,
                escape_xml(&shade.value),
                escape_xml(&shade.color),
                escape_xml(&shade.fill)
            )?;
        }
        w.write_all(b"</w:rPr>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: &Run) -> String {
        let mut out = Vec::new();
        run.write_xml(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_chained_styling_sets_independent_fields() {
        let mut run = Run::text("hello");
        run.bold().italic().color("FF0000");

        assert!(run.properties.bold);
        assert!(run.properties.italic);
        assert_eq!(run.properties.color.as_deref(), Some("FF0000"));

        // Clearing one field leaves the others untouched
        run.properties.color = None;
        assert!(run.properties.bold);
        assert!(run.properties.italic);
    }

    #[test]
    fn test_styling_replaces_previous_value() {
        let mut run = Run::new();
        run.highlight("yellow").highlight("green");
        assert_eq!(run.properties.highlight.as_deref(), Some("green"));
    }

    #[test]
    fn test_add_tab_appends_to_content() {
        let mut run = Run::text("after");
        run.add_tab();
        assert_eq!(
            run.children,
            vec![
                RunChild::Text("after".to_string()),
                RunChild::Tab,
            ]
        );
        // Tab insertion does not touch the property set
        assert!(run.properties.is_empty());
    }

    #[test]
    fn test_render_plain_run_omits_rpr() {
        let run = Run::text("plain");
        assert_eq!(
            render(&run),
            r#"<w:r><w:t xml:space="preserve">plain</w:t></w:r>"#
        );
    }

    #[test]
    fn test_render_styled_run() {
        let mut run = Run::text("x");
        run.bold().size("24").underline("single");
        let xml = render(&run);

        assert!(xml.starts_with("<w:r><w:rPr>"));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
        assert!(xml.contains(r#"<w:u w:val="single"/>"#));
        assert!(!xml.contains("<w:i/>"));
    }

    #[test]
    fn test_render_shading() {
        let mut run = Run::new();
        run.shade("clear", "auto", "E7E6E6");
        let xml = render(&run);
        assert!(xml.contains(r#"<w:shd w:val="clear" w:color="auto" w:fill="E7E6E6"/>"#));
    }

    #[test]
    fn test_render_escapes_text() {
        let run = Run::text("a < b & c");
        assert!(render(&run).contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_render_preserves_content_order() {
        let mut run = Run::new();
        run.add_text("one").add_break().add_text("two").add_tab();
        let xml = render(&run);
        let break_pos = xml.find("<w:br/>").unwrap();
        let two_pos = xml.find("two").unwrap();
        let tab_pos = xml.find("<w:tab/>").unwrap();
        assert!(break_pos < two_pos && two_pos < tab_pos);
    }
}
