// ABOUTME: Slide data model and deck assembly for the nbslides application
// ABOUTME: Walks notebook cells in order and dispatches them to the slide generators

use crate::directive::parse_directive;
use crate::errors::Result;
use crate::markdown;
use crate::notebook::{CellType, Notebook};
use crate::steps::expand;
use crate::tokenizer::{Line, Tokenizer};
use log::{debug, info};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletSlide {
    pub title: String,
    pub bullets: Vec<String>,
}

/// One reveal step of a code cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSlide {
    pub title: Option<String>,
    /// Shared by every step generated from the same cell
    pub lines: Arc<[Line]>,
    /// 1-based line numbers rendered bold
    pub highlighted: BTreeSet<usize>,
}

impl CodeSlide {
    pub fn is_highlighted(&self, line_number: usize) -> bool {
        self.highlighted.contains(&line_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Title(TitleSlide),
    Bullet(BulletSlide),
    Code(CodeSlide),
}

impl Slide {
    pub fn title(&self) -> Option<&str> {
        match self {
            Slide::Title(slide) => Some(&slide.title),
            Slide::Bullet(slide) => Some(&slide.title),
            Slide::Code(slide) => slide.title.as_deref(),
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slide::Title(slide) => write!(f, "title: {} / {}", slide.title, slide.subtitle),
            Slide::Bullet(slide) => write!(
                f,
                "bullets: {} ({} items)",
                slide.title,
                slide.bullets.len()
            ),
            Slide::Code(slide) => {
                let highlighted: Vec<String> =
                    slide.highlighted.iter().map(|line| line.to_string()).collect();
                write!(
                    f,
                    "code: {} ({} lines, highlight {})",
                    slide.title.as_deref().unwrap_or("<untitled>"),
                    slide.lines.len(),
                    highlighted.join(",")
                )
            }
        }
    }
}

/// Ordered, append-only slide sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// One numbered line per slide
    pub fn outline(&self) -> Vec<String> {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, slide)| format!("{:>3}. {}", i + 1, slide))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// Turns notebook cells into slides
pub struct DeckBuilder {
    tokenizer: Tokenizer,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::with_tokenizer(Tokenizer::python())
    }

    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Convert every cell in order.
    ///
    /// Stops at the first cell that fails; the error carries the 1-based cell
    /// index.
    pub fn build(&self, notebook: &Notebook) -> Result<Deck> {
        let mut deck = Deck::new();

        for (i, cell) in notebook.cells.iter().enumerate() {
            let index = i + 1;
            match cell.cell_type {
                CellType::Markdown => match markdown::classify(&cell.source) {
                    Some(slide) => deck.push(slide),
                    None => debug!("Cell {} produced no slide", index),
                },
                CellType::Code => {
                    if cell.source.trim().is_empty() {
                        debug!("Skipping empty code cell {}", index);
                        continue;
                    }
                    let slides = self
                        .code_slides(&cell.source)
                        .map_err(|e| e.in_cell(index))?;
                    debug!("Cell {} expanded into {} code slides", index, slides.len());
                    for slide in slides {
                        deck.push(Slide::Code(slide));
                    }
                }
                CellType::Other => debug!("Skipping cell {} of unsupported type", index),
            }
        }

        info!(
            "Built {} slides from {} cells",
            deck.len(),
            notebook.cells.len()
        );
        Ok(deck)
    }

    fn code_slides(&self, source: &str) -> Result<Vec<CodeSlide>> {
        let (config, code) = parse_directive(source)?;
        let lines = self.tokenizer.tokenize(&code);
        expand(lines, &config)
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}
