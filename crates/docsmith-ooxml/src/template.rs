//! Static template part sources
//!
//! Most parts of a DOCX are boilerplate that never changes between documents:
//! content types, package relationships, styles, settings, the theme. A
//! [`Template`] supplies those parts by relative archive path, either from
//! the compiled-in `default` set or from a directory the caller provides.

use std::fs;
use std::path::PathBuf;

use crate::error::{OoxmlError, Result};

/// The static parts every package must carry, by archive path
pub const REQUIRED_PARTS: &[&str] = &[
    "[Content_Types].xml",
    "_rels/.rels",
    "docProps/app.xml",
    "docProps/core.xml",
    "word/fontTable.xml",
    "word/settings.xml",
    "word/styles.xml",
    "word/theme/theme1.xml",
    "word/webSettings.xml",
];

/// A named source of static part bytes
#[derive(Debug, Clone)]
pub struct Template {
    source: Source,
}

#[derive(Debug, Clone)]
enum Source {
    /// A compiled-in part set, looked up by template name
    Builtin(&'static str),
    /// A caller-supplied directory mirroring the archive layout
    Dir(PathBuf),
}

impl Default for Template {
    fn default() -> Self {
        Self {
            source: Source::Builtin("default"),
        }
    }
}

impl Template {
    /// Select a compiled-in template by name
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(Self::default()),
            other => Err(OoxmlError::UnknownTemplate(other.to_string())),
        }
    }

    /// Use a directory of parts laid out like the archive
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Dir(path.into()),
        }
    }

    /// The fixed list of static parts the assembler will request
    pub fn part_list(&self) -> &'static [&'static str] {
        REQUIRED_PARTS
    }

    /// Open one static part by its relative archive path
    pub fn open(&self, path: &str) -> Result<Vec<u8>> {
        match &self.source {
            Source::Builtin(name) => builtin_part(name, path)
                .map(<[u8]>::to_vec)
                .ok_or_else(|| OoxmlError::MissingTemplatePart(path.to_string())),
            Source::Dir(dir) => fs::read(dir.join(path))
                .map_err(|_| OoxmlError::MissingTemplatePart(path.to_string())),
        }
    }
}

fn builtin_part(template: &str, path: &str) -> Option<&'static [u8]> {
    match (template, path) {
        ("default", "[Content_Types].xml") => {
            Some(include_bytes!("../templates/default/[Content_Types].xml"))
        }
        ("default", "_rels/.rels") => Some(include_bytes!("../templates/default/_rels/.rels")),
        ("default", "docProps/app.xml") => {
            Some(include_bytes!("../templates/default/docProps/app.xml"))
        }
        ("default", "docProps/core.xml") => {
            Some(include_bytes!("../templates/default/docProps/core.xml"))
        }
        ("default", "word/fontTable.xml") => {
            Some(include_bytes!("../templates/default/word/fontTable.xml"))
        }
        ("default", "word/settings.xml") => {
            Some(include_bytes!("../templates/default/word/settings.xml"))
        }
        ("default", "word/styles.xml") => {
            Some(include_bytes!("../templates/default/word/styles.xml"))
        }
        ("default", "word/theme/theme1.xml") => {
            Some(include_bytes!("../templates/default/word/theme/theme1.xml"))
        }
        ("default", "word/webSettings.xml") => {
            Some(include_bytes!("../templates/default/word/webSettings.xml"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_default_exists() {
        assert!(Template::builtin("default").is_ok());
    }

    #[test]
    fn test_builtin_unknown_name_fails() {
        let err = Template::builtin("corporate").unwrap_err();
        assert!(matches!(err, OoxmlError::UnknownTemplate(ref name) if name == "corporate"));
    }

    #[test]
    fn test_default_template_serves_every_required_part() {
        let template = Template::default();
        for path in template.part_list() {
            let bytes = template.open(path).unwrap();
            assert!(
                bytes.starts_with(b"<?xml"),
                "{path} should start with an XML declaration"
            );
        }
    }

    #[test]
    fn test_open_unknown_part_is_missing() {
        let template = Template::default();
        let err = template.open("word/nonexistent.xml").unwrap_err();
        assert!(matches!(err, OoxmlError::MissingTemplatePart(_)));
    }

    #[test]
    fn test_dir_template_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let part_dir = dir.path().join("word");
        fs::create_dir_all(&part_dir).unwrap();
        fs::write(part_dir.join("styles.xml"), b"<?xml version=\"1.0\"?><w:styles/>").unwrap();

        let template = Template::dir(dir.path());
        let bytes = template.open("word/styles.xml").unwrap();
        assert!(bytes.ends_with(b"<w:styles/>"));

        let err = template.open("word/settings.xml").unwrap_err();
        assert!(matches!(err, OoxmlError::MissingTemplatePart(ref p) if p == "word/settings.xml"));
    }
}
