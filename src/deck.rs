// ABOUTME: Deck model for the smartpitch application
// ABOUTME: Holds the editable title, tagline and ordered slides of a pitch deck

use crate::errors::{PitchError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One titled content block within a deck.
///
/// Both fields default to the empty string so that malformed generation
/// responses (a slide missing `title` or `content`) still deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// The full editable unit: title, tagline and ordered slides.
///
/// Slide order is presentation order and is preserved end to end; nothing
/// reorders or deduplicates slides. Exports read the deck without mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub tagline: String,
    pub slides: Vec<Slide>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            title: "SmartPitch Startup".to_string(),
            tagline: "Make childcare simple.".to_string(),
            slides: Vec::new(),
        }
    }
}

/// The payload extracted from a successful generation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a successful generation result to the deck.
    ///
    /// The slide sequence is replaced wholesale, even when it is empty. Title
    /// and tagline are replaced only when the response carries them; a carried
    /// empty string does replace the prior value.
    pub fn apply_generation(&mut self, outcome: GenerationOutcome) {
        info!("Applying generation result: {} slides", outcome.slides.len());
        if let Some(title) = outcome.title {
            self.title = title;
        }
        if let Some(tagline) = outcome.tagline {
            self.tagline = tagline;
        }
        self.slides = outcome.slides;
    }

    /// Load a deck from its JSON session file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PitchError::PathNotFoundError(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(PitchError::FileError)?;
        let deck = serde_json::from_str(&content)?;
        Ok(deck)
    }

    /// Save the deck to its JSON session file.
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::utils::ensure_parent_directory_exists(path)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(PitchError::FileError)?;
        Ok(())
    }
}

/// Derive a filesystem-safe filename stem from a deck title.
///
/// Every run of whitespace collapses to a single underscore; leading and
/// trailing whitespace contributes nothing. An empty or whitespace-only title
/// yields the literal stem "deck".
pub fn slug(title: &str) -> String {
    let collapsed = title.split_whitespace().collect::<Vec<_>>().join("_");
    if collapsed.is_empty() {
        "deck".to_string()
    } else {
        collapsed
    }
}
