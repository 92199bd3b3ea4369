//! Encode/decode round-trip coverage for section properties

use docsmith_wml::{
    Columns, DocGrid, FooterReference, HeaderReference, PageMargins, PageSize,
    SectionProperties, SectionType, WriteXml,
};

fn full_section() -> SectionProperties {
    SectionProperties {
        page_size: Some(PageSize {
            width: 11906,
            height: 16838,
        }),
        header_reference: Some(HeaderReference {
            id: "rId6".to_string(),
            header_type: "default".to_string(),
        }),
        footer_reference: Some(FooterReference {
            id: "rId7".to_string(),
            footer_type: "first".to_string(),
        }),
        section_type: Some(SectionType {
            value: "nextPage".to_string(),
        }),
        page_margins: Some(PageMargins {
            top: "1440".to_string(),
            right: "1800".to_string(),
            bottom: "1440".to_string(),
            left: "1800".to_string(),
            header: "851".to_string(),
            footer: "992".to_string(),
            gutter: "0".to_string(),
        }),
        columns: Some(Columns {
            space: "425".to_string(),
            num: "1".to_string(),
        }),
        doc_grid: Some(DocGrid {
            line_pitch: "312".to_string(),
            char_space: "0".to_string(),
        }),
    }
}

fn render(section: &SectionProperties) -> Vec<u8> {
    let mut out = Vec::new();
    section.write_xml(&mut out).unwrap();
    out
}

#[test]
fn roundtrip_with_all_children_present() {
    let original = full_section();
    let xml = render(&original);
    let decoded = SectionProperties::parse(&xml).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn roundtrip_empty_section() {
    let original = SectionProperties::new();
    let xml = render(&original);
    assert_eq!(xml, b"<w:sectPr/>");

    let decoded = SectionProperties::parse(&xml).unwrap();
    assert!(decoded.is_empty());
    assert_eq!(decoded, original);
}

#[test]
fn roundtrip_survives_reordered_children() {
    let original = full_section();

    // Hand-build the fragment with children in a different order than we
    // serialize them; field equality must still hold.
    let xml = br#"<w:sectPr>
        <w:docGrid w:linePitch="312" w:charSpace="0"/>
        <w:cols w:space="425" w:num="1"/>
        <w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" w:header="851" w:footer="992" w:gutter="0"/>
        <w:type w:val="nextPage"/>
        <w:footerReference r:id="rId7" w:type="first"/>
        <w:headerReference r:id="rId6" w:type="default"/>
        <w:pgSz w:w="11906" w:h="16838"/>
    </w:sectPr>"#;
    let decoded = SectionProperties::parse(xml).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn roundtrip_partial_section_leaves_others_absent() {
    let mut original = SectionProperties::new();
    original.page_margins = Some(PageMargins {
        top: "720".to_string(),
        ..Default::default()
    });

    let decoded = SectionProperties::parse(&render(&original)).unwrap();
    assert_eq!(decoded, original);
    assert!(decoded.page_size.is_none());
    assert!(decoded.doc_grid.is_none());
}
