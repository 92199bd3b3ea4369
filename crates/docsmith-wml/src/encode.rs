//! Streaming XML rendering
//!
//! Elements render themselves directly into an output sink instead of
//! building an intermediate string. Optional fields are omitted entirely when
//! absent, so an element with no content serializes as a self-closing tag.

use std::io::Write;

use crate::error::Result;

/// Render an element (and its children) as WordprocessingML
///
/// Implementations write the element's own tags; the XML declaration is the
/// container layer's concern.
pub trait WriteXml {
    /// Write this element into `w`, omitting absent optional fields
    fn write_xml(&self, w: &mut dyn Write) -> Result<()>;
}

/// Escape special XML characters in attribute values and text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(
            escape_xml(r#"a & b < "c">"#),
            "a &amp; b &lt; &quot;c&quot;&gt;"
        );
    }

    #[test]
    fn test_escape_xml_ampersand_first() {
        // Escaping must not double-escape the entities it introduces
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }
}
