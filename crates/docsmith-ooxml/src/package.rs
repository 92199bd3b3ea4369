//! Package assembly
//!
//! A [`Package`] owns everything that ends up in the container: the document
//! tree, its relationships, embedded media and the template supplying the
//! static boilerplate parts. Packing builds a path-to-source map covering
//! every required entry, then writes each one exactly once into the zip. The
//! first failure aborts the whole operation; partially written output is not
//! valid and the caller must discard it.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use docsmith_wml::Document;

use crate::error::Result;
use crate::marshal::XmlPart;
use crate::media::Media;
use crate::relationships::Relationships;
use crate::template::Template;

/// Archive path of the generated main document part
pub const DOCUMENT_PATH: &str = "word/document.xml";

/// Archive path of the generated document relationships part
pub const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";

/// An in-memory DOCX package
#[derive(Debug, Clone)]
pub struct Package {
    /// The main document tree
    pub document: Document,
    relationships: Relationships,
    media: Vec<Media>,
    template: Template,
}

/// Byte source for one archive entry
enum PartSource<'a> {
    /// Bytes already in hand (template parts)
    Static(Vec<u8>),
    /// Raw media bytes, borrowed from the package
    Blob(&'a [u8]),
    /// A generated part, rendered while the entry is being written
    Marshal(XmlPart<'a>),
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

impl Package {
    /// Create a package on the built-in default template
    pub fn new() -> Self {
        Self::with_template(Template::default())
    }

    /// Create a package on a caller-chosen template
    ///
    /// Seeds the baseline relationships so the template's boilerplate parts
    /// resolve from the main document.
    pub fn with_template(template: Template) -> Self {
        let mut relationships = Relationships::new();
        relationships.add("styles.xml", Relationships::TYPE_STYLES);
        relationships.add("settings.xml", Relationships::TYPE_SETTINGS);
        relationships.add("fontTable.xml", Relationships::TYPE_FONT_TABLE);
        relationships.add("theme/theme1.xml", Relationships::TYPE_THEME);
        relationships.add("webSettings.xml", Relationships::TYPE_WEB_SETTINGS);

        Self {
            document: Document::new(),
            relationships,
            media: Vec::new(),
            template,
        }
    }

    /// The document relationships
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// The document relationships, for callers adding their own targets
    pub fn relationships_mut(&mut self) -> &mut Relationships {
        &mut self.relationships
    }

    /// The embedded media items, in insertion order
    pub fn media(&self) -> &[Media] {
        &self.media
    }

    /// Embed an image and return its relationship id
    ///
    /// The blob is written to `word/media/image{N}.{extension}` where `N` is
    /// stable for the life of the package.
    pub fn add_image(&mut self, extension: &str, data: Vec<u8>) -> String {
        let id = self.media.len() as u32 + 1;
        let media = Media::new(id, extension, data);
        let rel_id = self
            .relationships
            .add(media.relationship_target(), Relationships::TYPE_IMAGE);
        self.media.push(media);
        rel_id
    }

    /// Write the whole package into `writer`
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        self.pack(&mut zip)?;
        zip.finish()?;
        Ok(())
    }

    /// Write the whole package to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// Assemble every required entry and copy it into the zip
    fn pack<W: Write + Seek>(&self, zip: &mut ZipWriter<W>) -> Result<()> {
        // Resolve every byte source up front so a missing template part
        // aborts before the first entry is created.
        let mut parts: BTreeMap<String, PartSource> = BTreeMap::new();

        for name in self.template.part_list() {
            parts.insert(name.to_string(), PartSource::Static(self.template.open(name)?));
        }

        parts.insert(
            DOCUMENT_PATH.to_string(),
            PartSource::Marshal(XmlPart::new(&self.document)),
        );
        parts.insert(
            DOCUMENT_RELS_PATH.to_string(),
            PartSource::Marshal(XmlPart::new(&self.relationships)),
        );

        for media in &self.media {
            parts.insert(media.archive_path(), PartSource::Blob(&media.data));
        }

        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (path, source) in &parts {
            zip.start_file(path, options)?;
            match source {
                PartSource::Static(bytes) => zip.write_all(bytes)?,
                PartSource::Blob(bytes) => zip.write_all(bytes)?,
                PartSource::Marshal(part) => part.write_into(zip)?,
            }
        }

        Ok(())
    }
}
