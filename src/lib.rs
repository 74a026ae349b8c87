// ABOUTME: Library module for the smartpitch program.
// ABOUTME: Contains the deck model, generation client, and PPTX/PDF exporters.

// Reexport modules
pub mod client;
pub mod config;
pub mod deck;
pub mod errors;
pub mod pdf;
pub mod pptx;
pub mod session;
pub mod utils;

// Reexport common types and functions
pub use client::{generate, ClientConfig};
pub use config::Config;
pub use deck::{slug, Deck, GenerationOutcome, Slide};
pub use errors::{PitchError, Result};
pub use pdf::{wrap_to_width, write_pdf};
pub use pptx::write_pptx;
pub use session::Session;
