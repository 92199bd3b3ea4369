//! Deferred part rendering
//!
//! Generated parts (the main document, the relationships part) are not
//! rendered into a buffer up front. [`XmlPart`] wraps the in-memory value and
//! exposes exactly one operation: stream the XML declaration plus the
//! rendered value into a byte sink. There is deliberately no buffer-returning
//! read surface, so a part is rendered once, at write time.

use std::io::Write;

use docsmith_wml::WriteXml;

use crate::error::Result;

/// The declaration every generated XML part starts with
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// A generated part, rendered only when the archive writer asks for bytes
pub struct XmlPart<'a> {
    value: &'a dyn WriteXml,
}

impl<'a> XmlPart<'a> {
    /// Wrap a renderable value as a deferred part
    pub fn new(value: &'a dyn WriteXml) -> Self {
        Self { value }
    }

    /// Stream the declaration and the rendered value into `w`
    pub fn write_into(&self, w: &mut dyn Write) -> Result<()> {
        w.write_all(XML_DECLARATION.as_bytes())?;
        self.value.write_xml(w)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsmith_wml::Document;

    #[test]
    fn test_write_into_emits_declaration_then_content() {
        let document = Document::new();
        let part = XmlPart::new(&document);

        let mut out = Vec::new();
        part.write_into(&mut out).unwrap();

        let xml = String::from_utf8(out).unwrap();
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml["<?xml".len()..].contains("<w:document"));
        assert!(xml.ends_with("</w:document>"));
    }
}
