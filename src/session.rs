// ABOUTME: Session state for the smartpitch application
// ABOUTME: Owns the deck and wires generation, edits and exports together

use crate::client::{self, ClientConfig};
use crate::deck::{slug, Deck};
use crate::errors::{PitchError, Result};
use crate::{pdf, pptx};
use log::info;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Single-slot in-flight marker for the generation request.
///
/// Acquiring while a request is outstanding fails; dropping the guard always
/// clears the slot, so the generate action is re-enabled on success and
/// failure alike.
pub(crate) struct InFlightGuard<'a> {
    flag: &'a Mutex<bool>,
}

impl<'a> InFlightGuard<'a> {
    pub(crate) fn acquire(flag: &'a Mutex<bool>) -> Result<Self> {
        let mut in_flight = flag.lock();
        if *in_flight {
            return Err(PitchError::RequestInFlight);
        }
        *in_flight = true;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.flag.lock() = false;
    }
}

/// The owned state behind the user-facing actions: one deck, at most one
/// generation request in flight.
pub struct Session {
    deck: Deck,
    in_flight: Mutex<bool>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            in_flight: Mutex::new(false),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Edit the deck title. Editing never touches the slides.
    pub fn set_title(&mut self, title: String) {
        self.deck.title = title;
    }

    /// Edit the deck tagline. Editing never touches the slides.
    pub fn set_tagline(&mut self, tagline: String) {
        self.deck.tagline = tagline;
    }

    /// Run one generation request and apply the result to the deck.
    ///
    /// At most one request may be in flight; a second call while one is
    /// outstanding fails with `RequestInFlight`. On any error the deck is
    /// left exactly as it was.
    pub fn generate(&mut self, prompt: &str, config: &ClientConfig) -> Result<()> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        let outcome = client::generate(prompt, config)?;
        self.deck.apply_generation(outcome);
        Ok(())
    }

    /// Export the deck as `<slug(title)>.pptx` into `output_dir`.
    ///
    /// The zero-slides precondition is enforced here, not in the adapter.
    pub fn export_pptx(&self, output_dir: &Path) -> Result<PathBuf> {
        if self.deck.slides.is_empty() {
            return Err(PitchError::EmptyDeck);
        }
        let path = output_dir.join(format!("{}.pptx", slug(&self.deck.title)));
        pptx::write_pptx(&self.deck, &path)?;
        info!("Exported PPTX to {:?}", path);
        Ok(path)
    }

    /// Export the deck as `<slug(title)>.pdf` into `output_dir`.
    ///
    /// The zero-slides precondition is enforced here, not in the adapter.
    pub fn export_pdf(&self, output_dir: &Path) -> Result<PathBuf> {
        if self.deck.slides.is_empty() {
            return Err(PitchError::EmptyDeck);
        }
        let path = output_dir.join(format!("{}.pdf", slug(&self.deck.title)));
        pdf::write_pdf(&self.deck, &path)?;
        info!("Exported PDF to {:?}", path);
        Ok(path)
    }
}
