// ABOUTME: Expands one tokenized code cell into its sequence of reveal slides
// ABOUTME: Every cell opens on a line-1 step before the configured highlight steps

use crate::deck::CodeSlide;
use crate::directive::CellConfig;
use crate::errors::{SlidesError, Result};
use crate::tokenizer::Line;
use std::collections::BTreeSet;
use std::iter;
use std::sync::Arc;

/// Build one code slide per reveal step.
///
/// All steps share the same line list and title; they differ only in which
/// line numbers are highlighted.
pub fn expand(lines: Vec<Line>, config: &CellConfig) -> Result<Vec<CodeSlide>> {
    let line_count = lines.len();
    if let Some(range) = config.highlights.iter().find(|range| range.end > line_count) {
        return Err(SlidesError::HighlightOutOfRange {
            line: range.start.max(line_count + 1),
            lines: line_count,
        });
    }

    let lines: Arc<[Line]> = lines.into();
    let steps = iter::once(BTreeSet::from([1])).chain(
        config
            .highlights
            .iter()
            .map(|range| range.lines().collect::<BTreeSet<usize>>()),
    );

    Ok(steps
        .map(|highlighted| CodeSlide {
            title: config.title.clone(),
            lines: Arc::clone(&lines),
            highlighted,
        })
        .collect())
}
