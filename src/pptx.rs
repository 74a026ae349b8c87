// ABOUTME: PPTX export module for the smartpitch application
// ABOUTME: Creates a PowerPoint presentation with one text slide per deck slide

use crate::deck::Deck;
use crate::errors::Result;
use crate::utils::ensure_parent_directory_exists;
use chrono;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use zip::{ZipWriter, write::FileOptions};

// Wide (16:9) slide size, 13.333" x 7.5" in EMU
const SLIDE_CX: i64 = 12_192_000;
const SLIDE_CY: i64 = 6_858_000;

const EMU_PER_INCH: f32 = 914_400.0;

fn emu(inches: f32) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Escape user text for inclusion in XML element content or attributes.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Build one positioned text box shape.
///
/// `size` is the font size in hundredths of a point; `color` an optional
/// sRGB hex triplet. Wrapping and overflow inside the box are left to the
/// consuming application.
#[allow(clippy::too_many_arguments)]
fn text_box(
    id: u32,
    name: &str,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
    size: u32,
    bold: bool,
    color: Option<&str>,
    text: &str,
) -> String {
    let bold_attr = if bold { r#" b="1""# } else { "" };
    let fill = match color {
        Some(hex) => format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, hex),
        None => String::new(),
    };
    format!(
        r#"            <p:sp>
                <p:nvSpPr>
                    <p:cNvPr id="{id}" name="{name}"/>
                    <p:cNvSpPr txBox="1"/>
                    <p:nvPr/>
                </p:nvSpPr>
                <p:spPr>
                    <a:xfrm>
                        <a:off x="{x}" y="{y}"/>
                        <a:ext cx="{cx}" cy="{cy}"/>
                    </a:xfrm>
                    <a:prstGeom prst="rect">
                        <a:avLst/>
                    </a:prstGeom>
                </p:spPr>
                <p:txBody>
                    <a:bodyPr/>
                    <a:lstStyle/>
                    <a:p>
                        <a:r>
                            <a:rPr lang="en-US" sz="{size}"{bold_attr}>{fill}</a:rPr>
                            <a:t>{text}</a:t>
                        </a:r>
                    </a:p>
                </p:txBody>
            </p:sp>"#,
        id = id,
        name = name,
        x = x,
        y = y,
        cx = cx,
        cy = cy,
        size = size,
        bold_attr = bold_attr,
        fill = fill,
        text = escape_xml(text),
    )
}

/// Generate a PPTX presentation with one slide per deck slide
pub fn write_pptx(deck: &Deck, output_file: &Path) -> Result<()> {
    info!(
        "Generating PPTX with {} slides at {:?}",
        deck.slides.len(),
        output_file
    );

    ensure_parent_directory_exists(output_file)?;

    let file = fs::File::create(output_file)?;
    let mut zip = ZipWriter::new(file);

    // Add [Content_Types].xml
    info!("Creating PPTX structure: [Content_Types].xml");
    zip.start_file("[Content_Types].xml", FileOptions::default())?;
    let content_types = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    {slides}
</Types>"#,
        slides = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, _)| {
                format!(
                    r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                    i + 1
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    );
    zip.write_all(content_types.as_bytes())?;

    // Add _rels/.rels
    info!("Creating PPTX structure: _rels/.rels");
    zip.start_file("_rels/.rels", FileOptions::default())?;
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;
    zip.write_all(rels.as_bytes())?;

    // Add docProps/app.xml
    info!("Creating PPTX structure: docProps/app.xml");
    zip.start_file("docProps/app.xml", FileOptions::default())?;
    let app_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>SmartPitch</Application>
    <Slides>{}</Slides>
</Properties>"#,
        deck.slides.len()
    );
    zip.write_all(app_xml.as_bytes())?;

    // Add docProps/core.xml
    info!("Creating PPTX structure: docProps/core.xml");
    zip.start_file("docProps/core.xml", FileOptions::default())?;
    let core_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>SmartPitch</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape_xml(&deck.title),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    zip.write_all(core_xml.as_bytes())?;

    // Add ppt/_rels/presentation.xml.rels
    info!("Creating PPTX structure: ppt/_rels/presentation.xml.rels");
    zip.start_file("ppt/_rels/presentation.xml.rels", FileOptions::default())?;

    let mut pres_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );

    // Add relationship for each slide
    for (i, _) in deck.slides.iter().enumerate() {
        pres_rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i + 1,
            i + 1
        ));
        pres_rels.push('\n');
    }

    pres_rels.push_str("</Relationships>");
    zip.write_all(pres_rels.as_bytes())?;

    // Add ppt/presentation.xml
    info!("Creating PPTX structure: ppt/presentation.xml");
    zip.start_file("ppt/presentation.xml", FileOptions::default())?;
    let presentation_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        slide_ids = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, _)| { format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 1) })
            .collect::<Vec<String>>()
            .join("\n"),
        cx = SLIDE_CX,
        cy = SLIDE_CY
    );
    zip.write_all(presentation_xml.as_bytes())?;

    // Process each slide
    for (i, slide) in deck.slides.iter().enumerate() {
        let slide_num = i + 1;
        info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);

        // Fixed text-box geometry, converted from inches. The deck title is
        // the large heading, the slide's own title the secondary heading, and
        // the content fills a 9"-wide body region.
        let deck_title_box = text_box(
            2,
            "DeckTitle",
            emu(0.5),
            emu(0.3),
            SLIDE_CX - emu(1.0),
            emu(0.8),
            2400,
            true,
            None,
            &deck.title,
        );
        let slide_title_box = text_box(
            3,
            "SlideTitle",
            emu(0.5),
            emu(1.2),
            SLIDE_CX - emu(1.0),
            emu(0.7),
            1800,
            false,
            Some("363636"),
            &slide.title,
        );
        let content_box = text_box(
            4,
            "Content",
            emu(0.5),
            emu(2.2),
            emu(9.0),
            SLIDE_CY - emu(2.5),
            1400,
            false,
            Some("444444"),
            &slide.content,
        );

        zip.start_file(
            format!("ppt/slides/slide{}.xml", slide_num),
            FileOptions::default(),
        )?;
        let slide_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
{deck_title_box}
{slide_title_box}
{content_box}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#,
            deck_title_box = deck_title_box,
            slide_title_box = slide_title_box,
            content_box = content_box,
        );
        zip.write_all(slide_xml.as_bytes())?;
    }

    // Finalize the ZIP file
    info!("Finalizing PPTX file");
    zip.finish()?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}
