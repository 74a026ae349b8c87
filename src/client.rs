// ABOUTME: Generation client for the smartpitch application
// ABOUTME: Posts a prompt to the remote endpoint and parses the slide response

use crate::deck::{GenerationOutcome, Slide};
use crate::errors::{PitchError, Result};
use log::info;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Configuration for the generation client.
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Wire format of the generation endpoint's response.
///
/// The `ok` flag in the body is authoritative; the HTTP status line is not
/// inspected. `slides` defaults to an empty sequence when absent.
#[derive(Deserialize)]
struct GenerateResponse {
    ok: bool,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    slides: Option<Vec<Slide>>,
    #[serde(default)]
    error: Option<String>,
}

/// Send one generation request for the given prompt.
///
/// A single attempt: no retry, no explicit timeout, no cancellation. Returns
/// `ServerRejected` when the body reports `ok: false` (with the server's
/// message, or "unknown"), and `FetchError` when the request or body parse
/// never completes.
pub fn generate(prompt: &str, config: &ClientConfig) -> Result<GenerationOutcome> {
    info!("Requesting deck generation from {}", config.endpoint);

    let client = Client::new();
    let response = client
        .post(&config.endpoint)
        .json(&GenerateRequest { prompt })
        .send()
        .map_err(PitchError::FetchError)?;

    let body: GenerateResponse = response.json().map_err(PitchError::FetchError)?;

    if !body.ok {
        let message = body.error.unwrap_or_else(|| "unknown".to_string());
        return Err(PitchError::ServerRejected(message));
    }

    let slides = body.slides.unwrap_or_default();
    info!("Generation succeeded with {} slides", slides.len());

    Ok(GenerationOutcome {
        title: body.title,
        tagline: body.tagline,
        slides,
    })
}
