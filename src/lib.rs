// ABOUTME: Library module for the nbslides program.
// ABOUTME: Contains the notebook to slide deck pipeline and the PPTX writer.

// Reexport modules
pub mod classifier;
pub mod config;
pub mod convert;
pub mod deck;
pub mod directive;
pub mod errors;
pub mod markdown;
pub mod notebook;
pub mod pptx;
pub mod steps;
pub mod tokenizer;
pub mod utils;

// Reexport common types and functions
pub use classifier::{Color, ColorTable};
pub use config::Config;
pub use convert::{convert_notebook, outline, ConversionSummary};
pub use deck::{BulletSlide, CodeSlide, Deck, DeckBuilder, Slide, TitleSlide};
pub use directive::{parse_directive, CellConfig, LineRange};
pub use errors::{Result, SlidesError};
pub use notebook::{read_notebook, Cell, CellType, Notebook};
pub use pptx::{write_pptx, PptxConfig};
pub use tokenizer::{Line, Token, TokenKind, Tokenizer};
