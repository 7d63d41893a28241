// ABOUTME: PPTX generation module for the nbslides application
// ABOUTME: Serializes a slide deck into an Office Open XML presentation package

use crate::classifier::ColorTable;
use crate::deck::{BulletSlide, CodeSlide, Deck, Slide, TitleSlide};
use crate::errors::{SlidesError, Result};
use crate::utils;
use log::{debug, info, warn};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NAMESPACES: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const TITLE_LAYOUT: usize = 1;
const CONTENT_LAYOUT: usize = 2;

// Master and layout ids share one id space and must start at 2^31
const MASTER_ID: u64 = 2147483648;
const FIRST_SLIDE_ID: usize = 256;

/// Configuration for PPTX generation
#[derive(Debug, Clone)]
pub struct PptxConfig {
    pub title: String,
    pub aspect_ratio: String, // "4:3" or "16:9"
    pub code_font: String,
    /// Code font size in points
    pub code_font_size: u32,
}

impl Default for PptxConfig {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            aspect_ratio: "4:3".to_string(),
            code_font: "Courier".to_string(),
            code_font_size: 14,
        }
    }
}

/// Placement of a shape, in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u64,
    y: u64,
    cx: u64,
    cy: u64,
}

impl Frame {
    fn xfrm(&self) -> String {
        format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.cx, self.cy
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlideSize {
    cx: u64,
    cy: u64,
    kind: &'static str,
}

impl SlideSize {
    fn for_aspect_ratio(aspect_ratio: &str) -> Self {
        match aspect_ratio {
            "4:3" => Self {
                cx: 9144000,
                cy: 6858000,
                kind: "screen4x3",
            },
            "16:9" => Self {
                cx: 9144000,
                cy: 5143500,
                kind: "screen16x9",
            },
            _ => {
                warn!(
                    "Unsupported aspect ratio: {}. Using 4:3 instead.",
                    aspect_ratio
                );
                Self::for_aspect_ratio("4:3")
            }
        }
    }

    fn margin(&self) -> u64 {
        self.cx / 20
    }

    fn title(&self) -> Frame {
        Frame {
            x: self.margin(),
            y: self.cy / 25,
            cx: self.cx - 2 * self.margin(),
            cy: self.cy / 6,
        }
    }

    fn body(&self) -> Frame {
        Frame {
            x: self.margin(),
            y: self.cy * 7 / 30,
            cx: self.cx - 2 * self.margin(),
            cy: self.cy * 2 / 3,
        }
    }

    fn centered_title(&self) -> Frame {
        Frame {
            x: self.cx * 3 / 40,
            y: self.cy * 31 / 100,
            cx: self.cx * 17 / 20,
            cy: self.cy * 21 / 100,
        }
    }

    fn subtitle(&self) -> Frame {
        Frame {
            x: self.cx * 3 / 20,
            y: self.cy * 57 / 100,
            cx: self.cx * 7 / 10,
            cy: self.cy / 4,
        }
    }
}

/// Escape text for XML content, dropping control characters XML 1.0 forbids
fn xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect();
    escape(cleaned.as_str()).into_owned()
}

/// Generate a PPTX presentation from a slide deck
pub fn write_pptx(
    deck: &Deck,
    output_file: &Path,
    config: &PptxConfig,
    colors: &ColorTable,
) -> Result<()> {
    info!("Writing {} slides to {:?}", deck.len(), output_file);
    if deck.is_empty() {
        warn!("Deck has no slides; writing an empty presentation");
    }

    // Ensure parent directory for output file exists
    utils::ensure_parent_directory_exists(output_file)?;

    let size = SlideSize::for_aspect_ratio(&config.aspect_ratio);
    let file = fs::File::create(output_file).map_err(SlidesError::FileReadError)?;
    let mut zip = ZipWriter::new(file);

    add_part(&mut zip, "[Content_Types].xml", &content_types_xml(deck.len()))?;
    add_part(&mut zip, "_rels/.rels", &package_rels_xml())?;
    add_part(&mut zip, "docProps/app.xml", &app_xml(deck.len()))?;
    add_part(&mut zip, "docProps/core.xml", &core_xml(&config.title))?;
    add_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels_xml(deck.len()),
    )?;
    add_part(
        &mut zip,
        "ppt/presentation.xml",
        &presentation_xml(deck.len(), &size),
    )?;
    add_part(&mut zip, "ppt/theme/theme1.xml", &theme_xml())?;
    add_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &master_rels_xml(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        &master_xml(&size),
    )?;
    for layout in [TITLE_LAYOUT, CONTENT_LAYOUT] {
        add_part(
            &mut zip,
            &format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", layout),
            &layout_rels_xml(),
        )?;
        add_part(
            &mut zip,
            &format!("ppt/slideLayouts/slideLayout{}.xml", layout),
            &layout_xml(layout, &size),
        )?;
    }

    for (i, slide) in deck.iter().enumerate() {
        let slide_num = i + 1;
        debug!("Rendering slide {}: {}", slide_num, slide);

        let (layout, xml) = match slide {
            Slide::Title(slide) => (TITLE_LAYOUT, title_slide_xml(slide, &size)),
            Slide::Bullet(slide) => (CONTENT_LAYOUT, bullet_slide_xml(slide, &size)),
            Slide::Code(slide) => (CONTENT_LAYOUT, code_slide_xml(slide, &size, config, colors)),
        };

        add_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            &slide_rels_xml(layout),
        )?;
        add_part(&mut zip, &format!("ppt/slides/slide{}.xml", slide_num), &xml)?;
    }

    // Finalize the ZIP file
    zip.finish()?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    debug!("Adding part: {}", name);
    zip.start_file(name, FileOptions::default())?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn content_types_xml(slide_count: usize) -> String {
    let slides = (1..=slide_count)
        .map(|n| {
            format!(
                r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                n
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout2.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slides}
</Types>"#
    )
}

fn package_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{REL_BASE}/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="{REL_BASE}/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"{XML_DECL}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>nbslides</Application>
    <Slides>{slide_count}</Slides>
</Properties>"#
    )
}

fn core_xml(title: &str) -> String {
    format!(
        r#"{XML_DECL}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>nbslides</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        xml_text(title),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

// rId1 is the master, rId2 the theme, slides follow from rId3
fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{REL_BASE}/slideMaster" Target="slideMasters/slideMaster1.xml"/>
    <Relationship Id="rId2" Type="{REL_BASE}/theme" Target="theme/theme1.xml"/>
"#
    );
    for n in 1..=slide_count {
        rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="{REL_BASE}/slide" Target="slides/slide{}.xml"/>"#,
            n + 2,
            n
        ));
        rels.push('\n');
    }
    rels.push_str("</Relationships>");
    rels
}

fn presentation_xml(slide_count: usize, size: &SlideSize) -> String {
    let slide_ids = if slide_count == 0 {
        String::new()
    } else {
        let ids = (1..=slide_count)
            .map(|n| {
                format!(
                    r#"        <p:sldId id="{}" r:id="rId{}"/>"#,
                    FIRST_SLIDE_ID + n - 1,
                    n + 2
                )
            })
            .collect::<Vec<String>>()
            .join("\n");
        format!("    <p:sldIdLst>\n{}\n    </p:sldIdLst>\n", ids)
    };

    format!(
        r#"{XML_DECL}
<p:presentation {NAMESPACES}>
    <p:sldMasterIdLst>
        <p:sldMasterId id="{MASTER_ID}" r:id="rId1"/>
    </p:sldMasterIdLst>
{slide_ids}    <p:sldSz cx="{cx}" cy="{cy}" type="{kind}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        cx = size.cx,
        cy = size.cy,
        kind = size.kind
    )
}

fn theme_xml() -> String {
    let accents = ["4472C4", "ED7D31", "A5A5A5", "FFC000", "5B9BD5", "70AD47"]
        .iter()
        .enumerate()
        .map(|(i, hex)| format!(r#"<a:accent{n}><a:srgbClr val="{hex}"/></a:accent{n}>"#, n = i + 1))
        .collect::<String>();
    let solid = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let fills = solid.repeat(3);
    let lines = format!(r#"<a:ln w="6350">{}</a:ln>"#, solid).repeat(3);
    let effects = "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3);

    format!(
        r#"{XML_DECL}
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="nbslides">
    <a:themeElements>
        <a:clrScheme name="nbslides">
            <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
            <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
            <a:dk2><a:srgbClr val="44546A"/></a:dk2>
            <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
            {accents}
            <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
            <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
        </a:clrScheme>
        <a:fontScheme name="nbslides">
            <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
            <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
        </a:fontScheme>
        <a:fmtScheme name="nbslides">
            <a:fillStyleLst>{fills}</a:fillStyleLst>
            <a:lnStyleLst>{lines}</a:lnStyleLst>
            <a:effectStyleLst>{effects}</a:effectStyleLst>
            <a:bgFillStyleLst>{fills}</a:bgFillStyleLst>
        </a:fmtScheme>
    </a:themeElements>
    <a:objectDefaults/>
    <a:extraClrSchemeLst/>
</a:theme>"#
    )
}

fn master_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{REL_BASE}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
    <Relationship Id="rId2" Type="{REL_BASE}/slideLayout" Target="../slideLayouts/slideLayout2.xml"/>
    <Relationship Id="rId3" Type="{REL_BASE}/theme" Target="../theme/theme1.xml"/>
</Relationships>"#
    )
}

fn layout_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{REL_BASE}/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    )
}

fn slide_rels_xml(layout: usize) -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{REL_BASE}/slideLayout" Target="../slideLayouts/slideLayout{layout}.xml"/>
</Relationships>"#
    )
}

const SHAPE_TREE_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

const EMPTY_PARAGRAPH: &str = r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#;

const BULLET_PPR: &str = r#"<a:pPr marL="342900" indent="-342900"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>"#;

/// A placeholder shape holding the given paragraphs
fn placeholder_shape(id: u32, name: &str, placeholder: &str, frame: Frame, paragraphs: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{placeholder}</p:nvPr></p:nvSpPr><p:spPr>{xfrm}</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
        xfrm = frame.xfrm()
    )
}

fn master_xml(size: &SlideSize) -> String {
    let shapes = [
        placeholder_shape(2, "Title Placeholder 1", r#"<p:ph type="title"/>"#, size.title(), EMPTY_PARAGRAPH),
        placeholder_shape(3, "Text Placeholder 2", r#"<p:ph type="body" idx="1"/>"#, size.body(), EMPTY_PARAGRAPH),
    ]
    .concat();

    format!(
        r#"{XML_DECL}
<p:sldMaster {NAMESPACES}>
    <p:cSld>
        <p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>
        <p:spTree>{SHAPE_TREE_HEADER}{shapes}</p:spTree>
    </p:cSld>
    <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
    <p:sldLayoutIdLst>
        <p:sldLayoutId id="{layout1}" r:id="rId1"/>
        <p:sldLayoutId id="{layout2}" r:id="rId2"/>
    </p:sldLayoutIdLst>
    <p:txStyles>
        <p:titleStyle><a:lvl1pPr algn="l"><a:defRPr sz="4400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/></a:defRPr></a:lvl1pPr></p:titleStyle>
        <p:bodyStyle><a:lvl1pPr marL="342900" indent="-342900"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/><a:defRPr sz="2800"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/></a:defRPr></a:lvl1pPr></p:bodyStyle>
        <p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"/></a:lvl1pPr></p:otherStyle>
    </p:txStyles>
</p:sldMaster>"#,
        layout1 = MASTER_ID + TITLE_LAYOUT as u64,
        layout2 = MASTER_ID + CONTENT_LAYOUT as u64
    )
}

fn layout_xml(layout: usize, size: &SlideSize) -> String {
    let (kind, name, shapes) = if layout == TITLE_LAYOUT {
        (
            "title",
            "Title Slide",
            [
                placeholder_shape(2, "Title 1", r#"<p:ph type="ctrTitle"/>"#, size.centered_title(), EMPTY_PARAGRAPH),
                placeholder_shape(3, "Subtitle 2", r#"<p:ph type="subTitle" idx="1"/>"#, size.subtitle(), EMPTY_PARAGRAPH),
            ]
            .concat(),
        )
    } else {
        (
            "obj",
            "Title and Content",
            [
                placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, size.title(), EMPTY_PARAGRAPH),
                placeholder_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, size.body(), EMPTY_PARAGRAPH),
            ]
            .concat(),
        )
    };

    format!(
        r#"{XML_DECL}
<p:sldLayout {NAMESPACES} type="{kind}" preserve="1">
    <p:cSld name="{name}">
        <p:spTree>{SHAPE_TREE_HEADER}{shapes}</p:spTree>
    </p:cSld>
    <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

fn slide_xml(shapes: &str) -> String {
    format!(
        r#"{XML_DECL}
<p:sld {NAMESPACES}>
    <p:cSld>
        <p:spTree>{SHAPE_TREE_HEADER}{shapes}</p:spTree>
    </p:cSld>
    <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#
    )
}

/// A single-run paragraph using the placeholder's inherited text style
fn text_paragraph(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_PARAGRAPH.to_string();
    }
    format!(
        r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
        xml_text(text)
    )
}

fn title_slide_xml(slide: &TitleSlide, size: &SlideSize) -> String {
    let shapes = [
        placeholder_shape(2, "Title 1", r#"<p:ph type="ctrTitle"/>"#, size.centered_title(), &text_paragraph(&slide.title)),
        placeholder_shape(3, "Subtitle 2", r#"<p:ph type="subTitle" idx="1"/>"#, size.subtitle(), &text_paragraph(&slide.subtitle)),
    ]
    .concat();
    slide_xml(&shapes)
}

fn bullet_slide_xml(slide: &BulletSlide, size: &SlideSize) -> String {
    let bullets = if slide.bullets.is_empty() {
        EMPTY_PARAGRAPH.to_string()
    } else {
        slide
            .bullets
            .iter()
            .map(|bullet| {
                format!(
                    r#"<a:p>{BULLET_PPR}<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
                    xml_text(bullet)
                )
            })
            .collect::<String>()
    };

    let shapes = [
        placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, size.title(), &text_paragraph(&slide.title)),
        placeholder_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, size.body(), &bullets),
    ]
    .concat();
    slide_xml(&shapes)
}

/// Code goes into the body as one unbulleted paragraph: one run per token,
/// and a line break after every source line.
fn code_slide_xml(slide: &CodeSlide, size: &SlideSize, config: &PptxConfig, colors: &ColorTable) -> String {
    let font = xml_text(&config.code_font);
    let font_size = config.code_font_size * 100;

    let mut paragraph = String::from(r#"<a:p><a:pPr marL="0" indent="0"><a:buNone/></a:pPr>"#);
    for (i, line) in slide.lines.iter().enumerate() {
        let bold = u8::from(slide.is_highlighted(i + 1));
        for token in &line.tokens {
            paragraph.push_str(&format!(
                r#"<a:r><a:rPr lang="en-US" sz="{font_size}" b="{bold}" dirty="0"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{font}"/><a:cs typeface="{font}"/></a:rPr><a:t>{text}</a:t></a:r>"#,
                color = colors.color_for(token.kind).to_hex(),
                text = xml_text(&token.text)
            ));
        }
        paragraph.push_str(&format!(r#"<a:br><a:rPr lang="en-US" sz="{font_size}" dirty="0"/></a:br>"#));
    }
    paragraph.push_str("</a:p>");

    let mut shapes = String::new();
    if let Some(title) = &slide.title {
        shapes.push_str(&placeholder_shape(2, "Title 1", r#"<p:ph type="title"/>"#, size.title(), &text_paragraph(title)));
    }
    shapes.push_str(&placeholder_shape(3, "Content Placeholder 2", r#"<p:ph idx="1"/>"#, size.body(), &paragraph));
    slide_xml(&shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_size_falls_back_to_four_by_three() {
        assert_eq!(SlideSize::for_aspect_ratio("21:9"), SlideSize::for_aspect_ratio("4:3"));
        assert_eq!(SlideSize::for_aspect_ratio("16:9").cy, 5143500);
    }

    #[test]
    fn test_frames_stay_on_the_slide() {
        for ratio in ["4:3", "16:9"] {
            let size = SlideSize::for_aspect_ratio(ratio);
            for frame in [size.title(), size.body(), size.centered_title(), size.subtitle()] {
                assert!(frame.x + frame.cx <= size.cx, "{:?} overflows width", frame);
                assert!(frame.y + frame.cy <= size.cy, "{:?} overflows height", frame);
            }
        }
    }

    #[test]
    fn test_xml_text_escapes_and_drops_control_characters() {
        assert_eq!(xml_text("a < b && c\u{0c}"), "a &lt; b &amp;&amp; c");
        assert_eq!(xml_text("\tindent"), "\tindent");
    }

    #[test]
    fn test_master_lists_both_layouts() {
        let xml = master_xml(&SlideSize::for_aspect_ratio("4:3"));
        assert!(xml.contains("<p:sldLayoutIdLst>"));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#));
    }
}
