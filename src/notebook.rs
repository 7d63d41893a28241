// ABOUTME: Notebook reading module for the nbslides application
// ABOUTME: Deserializes nbformat 4 JSON into an ordered list of typed cells

use crate::errors::{SlidesError, Result};
use log::info;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Oldest nbformat major version with a flat `cells` list
const MIN_NBFORMAT: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Markdown,
    Code,
    /// `raw` cells and anything newer we don't know about
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cell {
    pub cell_type: CellType,
    #[serde(default, deserialize_with = "deserialize_source")]
    pub source: String,
}

impl Cell {
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            cell_type: CellType::Markdown,
            source: source.into(),
        }
    }

    pub fn code(source: impl Into<String>) -> Self {
        Self {
            cell_type: CellType::Code,
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub nbformat: Option<u32>,
    pub cells: Vec<Cell>,
}

impl Notebook {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            nbformat: Some(MIN_NBFORMAT),
            cells,
        }
    }

    /// Parse a notebook from its JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let notebook: Notebook = serde_json::from_str(json)?;
        notebook.check_version()
    }

    fn check_version(self) -> Result<Self> {
        match self.nbformat {
            Some(version) if version < MIN_NBFORMAT => {
                Err(SlidesError::UnsupportedNotebookFormat(version))
            }
            _ => Ok(self),
        }
    }
}

/// Read a notebook file from disk
pub fn read_notebook(path: &Path) -> Result<Notebook> {
    info!("Reading notebook: {:?}", path);

    let file = File::open(path).map_err(SlidesError::FileReadError)?;
    let notebook: Notebook = serde_json::from_reader(BufReader::new(file))?;
    let notebook = notebook.check_version()?;

    info!("Notebook has {} cells", notebook.cells.len());
    Ok(notebook)
}

// nbformat allows a cell source to be a single string or a list of lines
#[derive(Deserialize)]
#[serde(untagged)]
enum MultilineText {
    Single(String),
    Lines(Vec<String>),
}

fn deserialize_source<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match MultilineText::deserialize(deserializer)? {
        MultilineText::Single(text) => text,
        MultilineText::Lines(lines) => lines.concat(),
    })
}
