// ABOUTME: Configuration module for the nbslides application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::pptx::PptxConfig;
use std::env;

pub const DEFAULT_THEME: &str = "InspiredGitHub";
pub const DEFAULT_CODE_FONT: &str = "Courier";
pub const DEFAULT_CODE_FONT_SIZE: u32 = 14;
pub const DEFAULT_ASPECT_RATIO: &str = "4:3";

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the syntect theme the base color table is derived from
    pub highlight_theme: String,
    pub code_font: String,
    /// Code font size in points
    pub code_font_size: u32,
    pub aspect_ratio: String,
    /// Deck title written to the document properties
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlight_theme: DEFAULT_THEME.to_string(),
            code_font: DEFAULT_CODE_FONT.to_string(),
            code_font_size: DEFAULT_CODE_FONT_SIZE,
            aspect_ratio: DEFAULT_ASPECT_RATIO.to_string(),
            title: None,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let highlight_theme =
            env::var("NBSLIDES_THEME").unwrap_or_else(|_| DEFAULT_THEME.to_string());
        let code_font =
            env::var("NBSLIDES_CODE_FONT").unwrap_or_else(|_| DEFAULT_CODE_FONT.to_string());
        let code_font_size = env::var("NBSLIDES_CODE_FONT_SIZE")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_CODE_FONT_SIZE);
        let aspect_ratio = env::var("NBSLIDES_ASPECT_RATIO")
            .unwrap_or_else(|_| DEFAULT_ASPECT_RATIO.to_string());

        Self {
            highlight_theme,
            code_font,
            code_font_size,
            aspect_ratio,
            title: None,
        }
    }

    /// Get a PPTX configuration with defaults from this config
    pub fn get_pptx_config(&self, fallback_title: Option<String>) -> PptxConfig {
        PptxConfig {
            title: self
                .title
                .clone()
                .or(fallback_title)
                .unwrap_or_else(|| "Presentation".to_string()),
            aspect_ratio: self.aspect_ratio.clone(),
            code_font: self.code_font.clone(),
            code_font_size: self.code_font_size,
        }
    }
}
