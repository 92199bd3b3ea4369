//! The document relationships part (`word/_rels/document.xml.rels`)
//!
//! OOXML parts reference each other through id-to-target mappings instead of
//! inline paths. The package keeps one relationships value for the main
//! document and renders it as a generated part at pack time.

use std::io::Write;

use docsmith_wml::{escape_xml, Result as WmlResult, WriteXml};

/// OOXML namespace for relationships
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Common relationship type URIs
impl Relationships {
    /// Styles relationship type
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Settings relationship type
    pub const TYPE_SETTINGS: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    /// Web settings relationship type
    pub const TYPE_WEB_SETTINGS: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/webSettings";
    /// Font table relationship type
    pub const TYPE_FONT_TABLE: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/fontTable";
    /// Theme relationship type
    pub const TYPE_THEME: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    /// Image relationship type
    pub const TYPE_IMAGE: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    /// Header part relationship type
    pub const TYPE_HEADER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    /// Footer part relationship type
    pub const TYPE_FOOTER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
}

/// One id-to-target mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id, e.g. "rId3"
    pub id: String,
    /// Target path, relative to the owning part
    pub target: String,
    /// Relationship type URI
    pub rel_type: String,
}

/// Ordered id-to-target map for one part
///
/// Insertion order is kept so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return the generated id (`rIdN`)
    pub fn add(&mut self, target: impl Into<String>, rel_type: impl Into<String>) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            target: target.into(),
            rel_type: rel_type.into(),
        });
        id
    }

    /// Get the target for a relationship id
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.target.as_str())
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no relationships
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }
}

impl WriteXml for Relationships {
    fn write_xml(&self, w: &mut dyn Write) -> WmlResult<()> {
        write!(w, r#"<Relationships xmlns="{RELATIONSHIPS_NS}">"#)?;
        for rel in &self.entries {
            write!(
                w,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.id),
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            )?;
        }
        w.write_all(b"</Relationships>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rels: &Relationships) -> String {
        let mut out = Vec::new();
        rels.write_xml(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_allocates_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("styles.xml", Relationships::TYPE_STYLES), "rId1");
        assert_eq!(
            rels.add("media/image1.png", Relationships::TYPE_IMAGE),
            "rId2"
        );
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId2"), Some("media/image1.png"));
        assert_eq!(rels.get("rId9"), None);
    }

    #[test]
    fn test_render_lists_entries_in_insertion_order() {
        let mut rels = Relationships::new();
        rels.add("styles.xml", Relationships::TYPE_STYLES);
        rels.add("settings.xml", Relationships::TYPE_SETTINGS);

        let xml = render(&rels);
        assert!(xml.starts_with(&format!(r#"<Relationships xmlns="{RELATIONSHIPS_NS}">"#)));
        let styles_pos = xml.find("styles.xml").unwrap();
        let settings_pos = xml.find("settings.xml").unwrap();
        assert!(styles_pos < settings_pos);
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Id="rId2""#));
    }

    #[test]
    fn test_render_escapes_targets() {
        let mut rels = Relationships::new();
        rels.add("a&b.xml", Relationships::TYPE_STYLES);
        assert!(render(&rels).contains(r#"Target="a&amp;b.xml""#));
    }

    #[test]
    fn test_empty_renders_bare_root() {
        let rels = Relationships::new();
        let xml = render(&rels);
        assert!(rels.is_empty());
        assert!(xml.ends_with("</Relationships>"));
        assert!(!xml.contains("<Relationship "));
    }
}
