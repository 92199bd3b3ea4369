//! Embedded media blobs
//!
//! Every media item gets a stable archive path derived from its id, e.g.
//! `word/media/image1.png`. The matching relationship target is the same path
//! relative to `word/`.

/// A binary media item embedded in the package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    id: u32,
    extension: String,
    /// Raw bytes written verbatim into the archive
    pub data: Vec<u8>,
}

impl Media {
    pub(crate) fn new(id: u32, extension: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id,
            extension: extension.into(),
            data,
        }
    }

    /// Stable per-item id, assigned by the package in insertion order
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Path of this item inside the archive
    pub fn archive_path(&self) -> String {
        format!("word/media/image{}.{}", self.id, self.extension)
    }

    /// Relationship target, relative to the `word/` part
    pub fn relationship_target(&self) -> String {
        format!("media/image{}.{}", self.id, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_id_and_extension() {
        let media = Media::new(3, "png", vec![0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(media.id(), 3);
        assert_eq!(media.archive_path(), "word/media/image3.png");
        assert_eq!(media.relationship_target(), "media/image3.png");
    }
}
