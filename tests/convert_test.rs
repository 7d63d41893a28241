use nbslides::{convert_notebook, write_pptx, ColorTable, Config, Deck, PptxConfig, SlidesError};
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

const NOTEBOOK: &str = r###"{
  "nbformat": 4,
  "nbformat_minor": 5,
  "metadata": {"kernelspec": {"name": "python3", "language": "python"}},
  "cells": [
    {"cell_type": "markdown", "metadata": {}, "source": ["# Control flow\n", "## Branches and loops"]},
    {"cell_type": "markdown", "metadata": {}, "source": ["# Today\n", "- if statements\n", "- for loops"]},
    {"cell_type": "code", "metadata": {}, "execution_count": 1, "outputs": [],
     "source": ["if x < 10:\n", "    print(x)\n", "#%title=\"Loop & print\" highlights=2"]}
  ]
}"###;

fn write_notebook(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("lesson.ipynb");
    fs::write(&path, content).expect("Failed to write notebook");
    path
}

fn read_part(pptx: &Path, name: &str) -> String {
    let file = fs::File::open(pptx).expect("Failed to open PPTX file");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as ZIP");
    let mut part = archive.by_name(name).expect("Missing part in PPTX");
    let mut content = String::new();
    part.read_to_string(&mut content)
        .expect("Failed to read part");
    content
}

fn slide_part_names(pptx: &Path) -> Vec<String> {
    let file = fs::File::open(pptx).expect("Failed to open PPTX file");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as ZIP");
    let mut names: Vec<String> = (0..archive.len())
        .filter_map(|i| archive.by_index(i).ok().map(|f| f.name().to_string()))
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_convert_notebook_writes_one_part_per_slide() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_notebook(temp_dir.path(), NOTEBOOK);
    let output = temp_dir.path().join("out").join("lesson.pptx");

    let summary = convert_notebook(&input, &output, &Config::default()).expect("conversion failed");

    assert_eq!(summary.title_slides, 1);
    assert_eq!(summary.bullet_slides, 1);
    assert_eq!(summary.code_slides, 2);
    assert!(output.exists(), "PPTX file was not created");

    assert_eq!(
        slide_part_names(&output),
        vec![
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/slide3.xml",
            "ppt/slides/slide4.xml",
        ]
    );

    let title = read_part(&output, "ppt/slides/slide1.xml");
    assert!(title.contains("Control flow"));
    assert!(title.contains("Branches and loops"));
    assert!(read_part(&output, "ppt/slides/_rels/slide1.xml.rels").contains("slideLayout1.xml"));

    let bullets = read_part(&output, "ppt/slides/slide2.xml");
    assert!(bullets.contains("<a:t>if statements</a:t>"));
    assert!(bullets.contains("<a:t>for loops</a:t>"));
    assert!(read_part(&output, "ppt/slides/_rels/slide2.xml.rels").contains("slideLayout2.xml"));

    let core = read_part(&output, "docProps/core.xml");
    assert!(core.contains("<dc:title>lesson</dc:title>"));
}

#[test]
fn test_code_steps_differ_only_in_bold_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_notebook(temp_dir.path(), NOTEBOOK);
    let output = temp_dir.path().join("lesson.pptx");

    convert_notebook(&input, &output, &Config::default()).expect("conversion failed");

    let step1 = read_part(&output, "ppt/slides/slide3.xml");
    let step2 = read_part(&output, "ppt/slides/slide4.xml");

    for step in [&step1, &step2] {
        assert!(step.contains("Loop &amp; print"), "title should be escaped");
        assert!(step.contains("&lt;"), "code should be escaped");
        assert!(step.contains(r#"<a:latin typeface="Courier"/>"#));
        assert!(step.contains(r#"sz="1400""#));
        assert!(!step.contains("#%"), "directive line must not be rendered");
        assert_eq!(step.matches("<a:br>").count(), 2);
    }

    // The same runs appear on both steps, only their weight moves
    assert_ne!(step1, step2);
    assert_eq!(
        step1.replace(r#"b="1""#, "").replace(r#"b="0""#, ""),
        step2.replace(r#"b="1""#, "").replace(r#"b="0""#, "")
    );

    // `if` on line 1 is bold and keyword-colored on the first step only
    let bold_keyword = r#"b="1" dirty="0"><a:solidFill><a:srgbClr val="008014"/></a:solidFill><a:latin typeface="Courier"/><a:cs typeface="Courier"/></a:rPr><a:t>if</a:t>"#;
    assert!(step1.contains(bold_keyword));
    assert!(!step2.contains(bold_keyword));
}

#[test]
fn test_code_font_settings_are_applied() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_notebook(temp_dir.path(), NOTEBOOK);
    let output = temp_dir.path().join("lesson.pptx");

    let config = Config {
        code_font: "Fira Mono".to_string(),
        code_font_size: 18,
        aspect_ratio: "16:9".to_string(),
        title: Some("Custom".to_string()),
        ..Config::default()
    };
    convert_notebook(&input, &output, &config).expect("conversion failed");

    let step = read_part(&output, "ppt/slides/slide3.xml");
    assert!(step.contains(r#"<a:latin typeface="Fira Mono"/>"#));
    assert!(step.contains(r#"sz="1800""#));

    let presentation = read_part(&output, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="9144000" cy="5143500" type="screen16x9"/>"#));
    assert!(read_part(&output, "docProps/core.xml").contains("<dc:title>Custom</dc:title>"));
}

#[test]
fn test_bad_directive_aborts_without_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let notebook = r##"{
      "nbformat": 4,
      "cells": [
        {"cell_type": "markdown", "source": "# Fine\n## Still fine"},
        {"cell_type": "code", "source": "x = 1\n#%highlights=5"}
      ]
    }"##;
    let input = write_notebook(temp_dir.path(), notebook);
    let output = temp_dir.path().join("lesson.pptx");

    let result = convert_notebook(&input, &output, &Config::default());

    match result {
        Err(SlidesError::CellError { index, source }) => {
            assert_eq!(index, 2);
            assert!(matches!(
                *source,
                SlidesError::HighlightOutOfRange { line: 5, lines: 1 }
            ));
        }
        other => panic!("expected a cell error, got {:?}", other),
    }
    assert!(!output.exists(), "no deck should be written on failure");
}

#[test]
fn test_missing_notebook_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("missing.ipynb");
    let output = temp_dir.path().join("lesson.pptx");

    let result = convert_notebook(&input, &output, &Config::default());
    assert!(matches!(result, Err(SlidesError::PathNotFoundError(path)) if path == input));
}

#[test]
fn test_unknown_theme_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_notebook(temp_dir.path(), NOTEBOOK);
    let output = temp_dir.path().join("lesson.pptx");

    let config = Config {
        highlight_theme: "Nope".to_string(),
        ..Config::default()
    };
    let result = convert_notebook(&input, &output, &config);
    assert!(matches!(result, Err(SlidesError::ThemeNotFound(_))));
}

#[test]
fn test_empty_deck_is_still_a_package() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("empty.pptx");

    write_pptx(
        &Deck::new(),
        &output,
        &PptxConfig::default(),
        &ColorTable::overrides_only(),
    )
    .expect("writing an empty deck failed");

    assert!(slide_part_names(&output).is_empty());
    let presentation = read_part(&output, "ppt/presentation.xml");
    assert!(presentation.contains("<p:sldMasterIdLst>"));
    assert!(!presentation.contains("<p:sldIdLst>"));
    assert!(read_part(&output, "ppt/theme/theme1.xml").contains("<a:clrScheme"));
}
