//! Section properties (`w:sectPr`) and its child elements
//!
//! A section carries the page-layout metadata for one document subdivision:
//! paper size, margins, header/footer references, column layout and the
//! document grid. Every child is optional, and real-world documents routinely
//! contain children from schema revisions we do not model, so the decoder is
//! deliberately tolerant: unknown elements are skipped as opaque subtrees and
//! unknown attributes are ignored.

use std::io::Write;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::encode::{escape_xml, WriteXml};
use crate::error::{Result, WmlError};

/// Page-layout properties of one document section
///
/// Each field is present or entirely absent; decode never substitutes a
/// default value for a missing child. Duplicate children in the input are
/// last-wins, matching what permissive readers do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionProperties {
    /// Paper size (`w:pgSz`)
    pub page_size: Option<PageSize>,
    /// Header part reference (`w:headerReference`)
    pub header_reference: Option<HeaderReference>,
    /// Footer part reference (`w:footerReference`)
    pub footer_reference: Option<FooterReference>,
    /// Section break type (`w:type`)
    pub section_type: Option<SectionType>,
    /// Page margins (`w:pgMar`)
    pub page_margins: Option<PageMargins>,
    /// Column layout (`w:cols`)
    pub columns: Option<Columns>,
    /// Document grid (`w:docGrid`)
    pub doc_grid: Option<DocGrid>,
}

/// Paper size in twentieths of a point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSize {
    /// Page width (`w:w`)
    pub width: u64,
    /// Page height (`w:h`)
    pub height: u64,
}

/// Reference from a section to a header part
///
/// The id is an opaque foreign key into the document relationships; the type
/// tag ("default", "first", "even") is stored untyped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderReference {
    /// Relationship id (`r:id`)
    pub id: String,
    /// Header type (`w:type`)
    pub header_type: String,
}

/// Reference from a section to a footer part
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterReference {
    /// Relationship id (`r:id`)
    pub id: String,
    /// Footer type (`w:type`)
    pub footer_type: String,
}

/// Section break type, e.g. "continuous" or "nextPage"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionType {
    /// The `w:val` attribute
    pub value: String,
}

/// Page margins
///
/// Values stay strings: the schema permits unit suffixes and this layer does
/// no unit interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMargins {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
    pub header: String,
    pub footer: String,
    pub gutter: String,
}

/// Column layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    /// Space between columns (`w:space`)
    pub space: String,
    /// Number of columns (`w:num`)
    pub num: String,
}

/// Document grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocGrid {
    /// Line pitch (`w:linePitch`)
    pub line_pitch: String,
    /// Character spacing (`w:charSpace`)
    pub char_space: String,
}

/// The fixed set of recognized `w:sectPr` children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionChild {
    PageSize,
    HeaderReference,
    FooterReference,
    SectionType,
    PageMargins,
    Columns,
    DocGrid,
}

impl SectionChild {
    fn from_tag(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"pgSz" => Some(Self::PageSize),
            b"headerReference" => Some(Self::HeaderReference),
            b"footerReference" => Some(Self::FooterReference),
            b"type" => Some(Self::SectionType),
            b"pgMar" => Some(Self::PageMargins),
            b"cols" => Some(Self::Columns),
            b"docGrid" => Some(Self::DocGrid),
            _ => None,
        }
    }
}

impl SectionProperties {
    /// Create an all-absent section
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no child is present
    pub fn is_empty(&self) -> bool {
        self.page_size.is_none()
            && self.header_reference.is_none()
            && self.footer_reference.is_none()
            && self.section_type.is_none()
            && self.page_margins.is_none()
            && self.columns.is_none()
            && self.doc_grid.is_none()
    }

    /// Decode a `w:sectPr` fragment
    ///
    /// Recognized children overwrite any previously decoded value of the same
    /// kind. Unknown children are skipped as opaque subtrees. A recognized
    /// child whose attributes decoded but whose body carried unexpected
    /// content keeps its decoded value and decoding continues; every other
    /// error aborts the whole decode.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut section = SectionProperties::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    match SectionChild::from_tag(e.local_name().as_ref()) {
                        Some(kind) => {
                            section.store(kind, e)?;
                            // The leaf is attribute-only; drain it so the
                            // cursor lands on the next sibling. Stray content
                            // inside it is tolerated, the field stays set.
                            match consume_element(&mut reader, e) {
                                Ok(()) => {}
                                Err(err) if err.is_recoverable() => {}
                                Err(err) => return Err(err),
                            }
                        }
                        None if e.local_name().as_ref() == b"sectPr" => {
                            // The fragment's own root; descend into it.
                        }
                        None => skip_subtree(&mut reader, e)?,
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    if let Some(kind) = SectionChild::from_tag(e.local_name().as_ref()) {
                        section.store(kind, e)?;
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(WmlError::Xml(e)),
                Ok(_) => {}
            }
            buf.clear();
        }

        Ok(section)
    }

    /// Decode one recognized child from its start tag and store it
    fn store(&mut self, kind: SectionChild, start: &BytesStart) -> Result<()> {
        match kind {
            SectionChild::PageSize => self.page_size = Some(PageSize::from_start(start)?),
            SectionChild::HeaderReference => {
                self.header_reference = Some(HeaderReference::from_start(start))
            }
            SectionChild::FooterReference => {
                self.footer_reference = Some(FooterReference::from_start(start))
            }
            SectionChild::SectionType => {
                self.section_type = Some(SectionType::from_start(start))
            }
            SectionChild::PageMargins => {
                self.page_margins = Some(PageMargins::from_start(start))
            }
            SectionChild::Columns => self.columns = Some(Columns::from_start(start)),
            SectionChild::DocGrid => self.doc_grid = Some(DocGrid::from_start(start)),
        }
        Ok(())
    }
}

/// Skip an unrecognized element and everything under it
fn skip_subtree(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<()> {
    let end = start.to_end().into_owned();
    let mut skip_buf = Vec::new();
    reader.read_to_end_into(end.name(), &mut skip_buf)?;
    Ok(())
}

/// Drain a recognized attribute-only leaf to its end tag
///
/// Leaves the reader positioned on the next sibling. Nested elements or
/// non-whitespace text inside the leaf are a shape mismatch: they are skipped
/// and reported as the recoverable [`WmlError::ElementShape`]. Truncated
/// input stays fatal.
fn consume_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<()> {
    let element = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let end = start.to_end().into_owned();
    let mut shape_ok = true;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::End(ref e)) if e.name() == end.name() => break,
            Ok(Event::Start(ref e)) => {
                skip_subtree(reader, e)?;
                shape_ok = false;
            }
            Ok(Event::Empty(_)) => shape_ok = false,
            Ok(Event::Text(ref t)) => {
                if !t.iter().all(|b| b.is_ascii_whitespace()) {
                    shape_ok = false;
                }
            }
            Ok(Event::Eof) => return Err(WmlError::UnexpectedEof { element }),
            Err(e) => return Err(WmlError::Xml(e)),
            Ok(_) => {}
        }
        buf.clear();
    }

    if shape_ok {
        Ok(())
    } else {
        Err(WmlError::ElementShape { element })
    }
}

/// Copy an attribute's value, ignoring escape problems the way a permissive
/// reader does
fn attr_value(attr: &Attribute) -> String {
    attr.unescape_value()
        .map(|v| v.into_owned())
        .unwrap_or_default()
}

fn parse_numeric(
    element: &'static str,
    attribute: &'static str,
    attr: &Attribute,
) -> Result<u64> {
    let value = attr_value(attr);
    value
        .parse()
        .map_err(|source| WmlError::MalformedAttribute {
            element,
            attribute,
            value,
            source,
        })
}

impl PageSize {
    /// Read recognized attributes from a `w:pgSz` start tag
    ///
    /// The only numeric leaf: a present but non-numeric width or height is a
    /// hard decode failure. A missing attribute leaves the field at zero.
    fn from_start(start: &BytesStart) -> Result<Self> {
        let mut size = PageSize::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            match attr.key.local_name().as_ref() {
                b"w" => size.width = parse_numeric("pgSz", "w", &attr)?,
                b"h" => size.height = parse_numeric("pgSz", "h", &attr)?,
                _ => {}
            }
        }
        Ok(size)
    }
}

impl HeaderReference {
    fn from_start(start: &BytesStart) -> Self {
        let mut reference = HeaderReference::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            match attr.key.local_name().as_ref() {
                b"id" => reference.id = attr_value(&attr),
                b"type" => reference.header_type = attr_value(&attr),
                _ => {}
            }
        }
        reference
    }
}

impl FooterReference {
    fn from_start(start: &BytesStart) -> Self {
        let mut reference = FooterReference::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            match attr.key.local_name().as_ref() {
                b"id" => reference.id = attr_value(&attr),
                b"type" => reference.footer_type = attr_value(&attr),
                _ => {}
            }
        }
        reference
    }
}

impl SectionType {
    fn from_start(start: &BytesStart) -> Self {
        let mut section_type = SectionType::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            if attr.key.local_name().as_ref() == b"val" {
                section_type.value = attr_value(&attr);
            }
        }
        section_type
    }
}

impl PageMargins {
    fn from_start(start: &BytesStart) -> Self {
        let mut margins = PageMargins::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            match attr.key.local_name().as_ref() {
                b"top" => margins.top = attr_value(&attr),
                b"right" => margins.right = attr_value(&attr),
                b"bottom" => margins.bottom = attr_value(&attr),
                b"left" => margins.left = attr_value(&attr),
                b"header" => margins.header = attr_value(&attr),
                b"footer" => margins.footer = attr_value(&attr),
                b"gutter" => margins.gutter = attr_value(&attr),
                _ => {}
            }
        }
        margins
    }
}

impl Columns {
    fn from_start(start: &BytesStart) -> Self {
        let mut columns = Columns::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            match attr.key.local_name().as_ref() {
                b"space" => columns.space = attr_value(&attr),
                b"num" => columns.num = attr_value(&attr),
                _ => {}
            }
        }
        columns
    }
}

impl DocGrid {
    fn from_start(start: &BytesStart) -> Self {
        let mut grid = DocGrid::default();
        for attr in start.attributes().filter_map(|a| a.ok()) {
            match attr.key.local_name().as_ref() {
                b"linePitch" => grid.line_pitch = attr_value(&attr),
                b"charSpace" => grid.char_space = attr_value(&attr),
                _ => {}
            }
        }
        grid
    }
}

impl WriteXml for SectionProperties {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        if self.is_empty() {
            w.write_all(b"<w:sectPr/>")?;
            return Ok(());
        }
        w.write_all(b"<w:sectPr>")?;
        if let Some(page_size) = &self.page_size {
            page_size.write_xml(w)?;
        }
        if let Some(header) = &self.header_reference {
            header.write_xml(w)?;
        }
        if let Some(footer) = &self.footer_reference {
            footer.write_xml(w)?;
        }
        if let Some(section_type) = &self.section_type {
            section_type.write_xml(w)?;
        }
        if let Some(margins) = &self.page_margins {
            margins.write_xml(w)?;
        }
        if let Some(columns) = &self.columns {
            columns.write_xml(w)?;
        }
        if let Some(grid) = &self.doc_grid {
            grid.write_xml(w)?;
        }
        w.write_all(b"</w:sectPr>")?;
        Ok(())
    }
}

impl WriteXml for PageSize {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(w, r#"<w:pgSz w:w="{}" w:h="{}"/>"#, self.width, self.height)?;
        Ok(())
    }
}

impl WriteXml for HeaderReference {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(
            w,
            r#"<w:headerReference r:id="{}" w:type="{}"/>"#,
            escape_xml(&self.id),
            escape_xml(&self.header_type)
        )?;
        Ok(())
    }
}

impl WriteXml for FooterReference {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(
            w,
            r#"<w:footerReference r:id="{}" w:type="{}"/>"#,
            escape_xml(&self.id),
            escape_xml(&self.footer_type)
        )?;
        Ok(())
    }
}

impl WriteXml for SectionType {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(w, r#"<w:type w:val="{}"/>"#, escape_xml(&self.value))?;
        Ok(())
    }
}

impl WriteXml for PageMargins {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(
            w,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="{}"/>"#,
            escape_xml(&self.top),
            escape_xml(&self.right),
            escape_xml(&self.bottom),
            escape_xml(&self.left),
            escape_xml(&self.header),
            escape_xml(&self.footer),
            escape_xml(&self.gutter)
        )?;
        Ok(())
    }
}

impl WriteXml for Columns {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(
            w,
            r#"<w:cols w:space="{}" w:num="{}"/>"#,
            escape_xml(&self.space),
            escape_xml(&self.num)
        )?;
        Ok(())
    }
}

impl WriteXml for DocGrid {
    fn write_xml(&self, w: &mut dyn Write) -> Result<()> {
        write!(
            w,
            r#"<w:docGrid w:linePitch="{}" w:charSpace="{}"/>"#,
            escape_xml(&self.line_pitch),
            escape_xml(&self.char_space)
        )?;
        Ok(())
    }
}
