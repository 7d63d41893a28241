// ABOUTME: Parser for the per-cell configuration directive
// ABOUTME: Decodes a trailing `#%key=value ...` line into a typed CellConfig

use crate::errors::{SlidesError, Result};
use log::debug;
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Prefix that marks the last line of a code cell as a directive
pub const DIRECTIVE_MARKER: &str = "#%";

/// Inclusive span of 1-based line numbers highlighted in one reveal step.
///
/// Only the bounds are stored; the expander checks `end` against the cell's
/// line count before any line is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(line: usize) -> Self {
        Self::new(line, line)
    }

    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Rendering options for one code cell.
///
/// `highlights` holds the explicitly requested reveal steps, one line range
/// each. The implicit first step is added by the expander.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellConfig {
    pub title: Option<String>,
    pub highlights: Vec<LineRange>,
}

impl CellConfig {
    /// Build a config from the text following the directive marker.
    ///
    /// ```
    /// use nbslides::directive::{CellConfig, LineRange};
    ///
    /// let config = CellConfig::parse(r#"title="Intro" highlights=2-4,6"#).unwrap();
    /// assert_eq!(config.title.as_deref(), Some("Intro"));
    /// assert_eq!(config.highlights, vec![LineRange::new(2, 4), LineRange::single(6)]);
    /// ```
    pub fn parse(directive: &str) -> Result<Self> {
        let mut config = CellConfig::default();

        for word in split_words(directive)? {
            let (key, value) = word.split_once('=').unwrap_or((word.as_str(), ""));
            match key {
                "title" => config.title = Some(value.to_string()),
                "highlights" => config.highlights = parse_highlights(value)?,
                _ => debug!("Ignoring unknown directive key {:?}", key),
            }
        }

        Ok(config)
    }
}

/// Separate a trailing directive line from the code above it.
///
/// Returns the directive text after the marker, if any, and the code. Without
/// a directive the code is the untouched source.
pub fn split_directive(source: &str) -> (Option<&str>, Cow<'_, str>) {
    let lines: Vec<&str> = source.lines().collect();
    if let Some((last, code)) = lines.split_last() {
        if let Some(directive) = last.strip_prefix(DIRECTIVE_MARKER) {
            return (Some(directive), Cow::Owned(code.join("\n")));
        }
    }
    (None, Cow::Borrowed(source))
}

/// Extract the cell config and the code it applies to
pub fn parse_directive(source: &str) -> Result<(CellConfig, Cow<'_, str>)> {
    let (directive, code) = split_directive(source);
    let config = match directive {
        Some(directive) => CellConfig::parse(directive)?,
        None => CellConfig::default(),
    };
    Ok((config, code))
}

fn parse_highlights(value: &str) -> Result<Vec<LineRange>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }
    value.split(',').map(parse_range).collect()
}

// `N` or `N-M`, inclusive on both ends
fn parse_range(range: &str) -> Result<LineRange> {
    let range = range.trim();
    let (start, end) = match range.split_once('-') {
        Some((start, end)) => (parse_line_number(start, range)?, parse_line_number(end, range)?),
        None => {
            let line = parse_line_number(range, range)?;
            (line, line)
        }
    };

    if end < start {
        return Err(SlidesError::DirectiveError(format!(
            "highlight range {:?} ends before it starts",
            range
        )));
    }

    Ok(LineRange::new(start, end))
}

fn parse_line_number(text: &str, range: &str) -> Result<usize> {
    let line = text.trim().parse::<usize>().map_err(|_| {
        SlidesError::DirectiveError(format!(
            "{:?} is not a line number in highlight range {:?}",
            text, range
        ))
    })?;
    if line == 0 {
        return Err(SlidesError::DirectiveError(format!(
            "line numbers start at 1 in highlight range {:?}",
            range
        )));
    }
    Ok(line)
}

/// Shell-style word splitting, following `shlex.split`.
///
/// Single quotes are literal. Inside double quotes a backslash only escapes
/// `"` and `\\` and is kept before anything else, as `shlex.split` does. A bare
/// backslash escapes the next character, and quoted pieces glue onto adjacent
/// text (`title="A B"` is one word).
fn split_words(input: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => word.push(c),
                        None => return Err(unterminated_quote('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(c @ ('"' | '\\')) => word.push(c),
                            Some(c) => {
                                word.push('\\');
                                word.push(c);
                            }
                            None => return Err(unterminated_quote('"')),
                        },
                        Some(c) => word.push(c),
                        None => return Err(unterminated_quote('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                match chars.next() {
                    Some(c) => word.push(c),
                    None => {
                        return Err(SlidesError::DirectiveError(
                            "trailing backslash with nothing to escape".to_string(),
                        ))
                    }
                }
            }
            c => {
                in_word = true;
                word.push(c);
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}

fn unterminated_quote(quote: char) -> SlidesError {
    SlidesError::DirectiveError(format!("missing closing {} quote", quote))
}
