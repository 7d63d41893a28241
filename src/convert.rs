// ABOUTME: Top-level conversion entry point for the nbslides application
// ABOUTME: Reads a notebook, builds the slide deck and writes it out as PPTX

use crate::classifier::ColorTable;
use crate::config::Config;
use crate::deck::{Deck, DeckBuilder, Slide};
use crate::errors::Result;
use crate::notebook::read_notebook;
use crate::pptx::write_pptx;
use crate::utils;
use log::info;
use std::path::Path;

/// Slide counts of a finished conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub title_slides: usize,
    pub bullet_slides: usize,
    pub code_slides: usize,
}

impl ConversionSummary {
    pub fn from_deck(deck: &Deck) -> Self {
        deck.iter().fold(Self::default(), |mut summary, slide| {
            match slide {
                Slide::Title(_) => summary.title_slides += 1,
                Slide::Bullet(_) => summary.bullet_slides += 1,
                Slide::Code(_) => summary.code_slides += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.title_slides + self.bullet_slides + self.code_slides
    }
}

/// Build the deck for a notebook file without writing anything
pub fn outline(input: &Path) -> Result<Deck> {
    utils::validate_file_exists(input)?;
    let notebook = read_notebook(input)?;
    DeckBuilder::new().build(&notebook)
}

/// Convert a notebook file into a PPTX deck.
///
/// Either the whole notebook converts or nothing is written: the deck is
/// built completely before the output file is created.
pub fn convert_notebook(input: &Path, output: &Path, config: &Config) -> Result<ConversionSummary> {
    info!("Converting {:?} to {:?}", input, output);

    utils::validate_file_exists(input)?;
    let colors = ColorTable::from_theme_name(&config.highlight_theme)?;
    let notebook = read_notebook(input)?;
    let deck = DeckBuilder::new().build(&notebook)?;

    let pptx_config = config.get_pptx_config(utils::file_stem_title(input));
    write_pptx(&deck, output, &pptx_config, &colors)?;

    let summary = ConversionSummary::from_deck(&deck);
    info!(
        "Wrote {} slides ({} title, {} bullet, {} code)",
        summary.total(),
        summary.title_slides,
        summary.bullet_slides,
        summary.code_slides
    );
    Ok(summary)
}
