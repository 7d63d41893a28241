// ABOUTME: Token classifier that maps token kinds to display colors
// ABOUTME: Builds an immutable color table from a syntect theme plus fixed overrides

use crate::errors::{SlidesError, Result};
use crate::tokenizer::TokenKind;
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;
use syntect::highlighting::{Highlighter, Theme, ThemeSet};
use syntect::parsing::ScopeStack;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `RRGGBB`, the form DrawingML `srgbClr` expects
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<syntect::highlighting::Color> for Color {
    fn from(color: syntect::highlighting::Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}

const KEYWORD: Color = Color::new(0, 128, 20);
const CLASS_NAME: Color = Color::new(49, 0, 250);
const NAME: Color = Color::new(27, 82, 167);

const OVERRIDES: &[(TokenKind, Color)] = &[
    (TokenKind::Keyword, KEYWORD),
    (TokenKind::KeywordConstant, KEYWORD),
    (TokenKind::NameClass, CLASS_NAME),
    (TokenKind::NameFunctionMagic, CLASS_NAME),
    (TokenKind::NameBuiltinPseudo, NAME),
    (TokenKind::Name, NAME),
    (TokenKind::CommentSingle, Color::new(76, 135, 135)),
    (TokenKind::Operator, Color::new(175, 24, 251)),
];

// Scope stack the theme is queried with for each kind. Kinds left out here
// never get a theme color and render black unless overridden.
const THEME_SCOPES: &[(TokenKind, &str)] = &[
    (TokenKind::Keyword, "source.python keyword.control.python"),
    (TokenKind::KeywordConstant, "source.python constant.language.python"),
    (TokenKind::Name, "source.python variable.other.python"),
    (TokenKind::NameClass, "source.python entity.name.class.python"),
    (TokenKind::NameFunction, "source.python entity.name.function.python"),
    (TokenKind::NameFunctionMagic, "source.python support.function.magic.python"),
    (TokenKind::NameDecorator, "source.python entity.name.function.decorator.python"),
    (TokenKind::NameBuiltin, "source.python support.function.builtin.python"),
    (TokenKind::NameBuiltinPseudo, "source.python variable.language.python"),
    (TokenKind::String, "source.python string.quoted.double.python"),
    (TokenKind::Number, "source.python constant.numeric.integer.decimal.python"),
    (TokenKind::Operator, "source.python keyword.operator.python"),
    (TokenKind::Punctuation, "source.python punctuation.separator.python"),
    (TokenKind::Comment, "source.python comment.block.python"),
    (TokenKind::CommentSingle, "source.python comment.line.number-sign.python"),
];

/// Kind to color lookup, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: HashMap<TokenKind, Color>,
}

impl ColorTable {
    /// Build the table from one of syntect's bundled themes
    pub fn from_theme_name(name: &str) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        let theme = themes
            .themes
            .remove(name)
            .ok_or_else(|| SlidesError::ThemeNotFound(name.to_string()))?;
        Ok(Self::from_theme(&theme))
    }

    pub fn from_theme(theme: &Theme) -> Self {
        let highlighter = Highlighter::new(theme);
        let mut colors = HashMap::new();

        for (kind, scopes) in THEME_SCOPES {
            match ScopeStack::from_str(scopes) {
                Ok(stack) => {
                    let style = highlighter.style_for_stack(stack.as_slice());
                    colors.insert(*kind, Color::from(style.foreground));
                }
                Err(e) => debug!("Skipping unparsable scope {:?}: {:?}", scopes, e),
            }
        }

        let mut table = Self { colors };
        table.apply_overrides();
        table
    }

    /// A table with only the fixed overrides, no theme underneath
    pub fn overrides_only() -> Self {
        let mut table = Self {
            colors: HashMap::new(),
        };
        table.apply_overrides();
        table
    }

    fn apply_overrides(&mut self) {
        self.colors.extend(OVERRIDES.iter().copied());
    }

    /// Color for a token kind; kinds with no entry are black
    pub fn color_for(&self, kind: TokenKind) -> Color {
        self.colors.get(&kind).copied().unwrap_or(Color::BLACK)
    }
}

/// Names of the bundled highlight themes, sorted
pub fn available_themes() -> Vec<String> {
    ThemeSet::load_defaults().themes.into_keys().collect()
}
