// ABOUTME: PDF export module for the smartpitch application
// ABOUTME: Creates a landscape paged document with one page per deck slide

use crate::deck::Deck;
use crate::errors::{PitchError, Result};
use crate::utils::ensure_parent_directory_exists;
use log::info;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::io::BufWriter;
use std::path::Path;

// Landscape A4 page. Positions are measured from the top-left: deck title at
// 20mm, slide title at 40mm, body from 60mm down.
const PAGE_W_MM: f32 = 297.0;
const PAGE_H_MM: f32 = 210.0;
const MARGIN_LEFT_MM: f32 = 20.0;
const TITLE_Y_MM: f32 = 20.0;
const SLIDE_TITLE_Y_MM: f32 = 40.0;
const BODY_Y_MM: f32 = 60.0;
const BODY_WIDTH_MM: f32 = 260.0;
const BOTTOM_MARGIN_MM: f32 = 10.0;

const TITLE_PT: f32 = 22.0;
const SLIDE_TITLE_PT: f32 = 16.0;
const BODY_PT: f32 = 12.0;
const LINE_SPACING: f32 = 1.15;

const PT_TO_MM: f32 = 0.352_778;
// Average Helvetica glyph advance, as a fraction of the font size
const AVG_GLYPH_EM: f32 = 0.5;

/// Wrap text to a maximum rendered width.
///
/// Line width is estimated from an average glyph advance for the built-in
/// Helvetica face. Wrapping is greedy on word boundaries; a word longer than
/// a full line is hard-broken. Embedded newlines always start a new line.
pub fn wrap_to_width(text: &str, max_width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let glyph_mm = font_size_pt * PT_TO_MM * AVG_GLYPH_EM;
    let max_chars = ((max_width_mm / glyph_mm).floor() as usize).max(1);

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace().peekable();
        if words.peek().is_none() {
            // Blank paragraphs keep their vertical space
            lines.push(String::new());
            continue;
        }

        let mut line = String::new();
        for word in words {
            let word_len = word.chars().count();
            if line.is_empty() {
                line = fit_word(word, word_len, max_chars, &mut lines);
            } else if line.chars().count() + 1 + word_len <= max_chars {
                line.push(' ');
                line.push_str(word);
            } else {
                lines.push(std::mem::take(&mut line));
                line = fit_word(word, word_len, max_chars, &mut lines);
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

/// Place a word at the start of a fresh line, hard-breaking it when it is
/// longer than a full line. Returns the (possibly partial) trailing line.
fn fit_word(word: &str, word_len: usize, max_chars: usize, lines: &mut Vec<String>) -> String {
    if word_len <= max_chars {
        return word.to_string();
    }
    let chars: Vec<char> = word.chars().collect();
    let mut start = 0;
    while chars.len() - start > max_chars {
        lines.push(chars[start..start + max_chars].iter().collect());
        start += max_chars;
    }
    chars[start..].iter().collect()
}

/// Generate a landscape PDF with one page per deck slide
pub fn write_pdf(deck: &Deck, output_file: &Path) -> Result<()> {
    info!(
        "Generating PDF with {} slides at {:?}",
        deck.slides.len(),
        output_file
    );

    ensure_parent_directory_exists(output_file)?;

    let (doc, first_page, first_layer) = PdfDocument::new(
        deck.title.as_str(),
        Mm(PAGE_W_MM),
        Mm(PAGE_H_MM),
        "Slide 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PitchError::PdfError(e.to_string()))?;

    let line_height_mm = BODY_PT * PT_TO_MM * LINE_SPACING;

    for (i, slide) in deck.slides.iter().enumerate() {
        let (page, layer_index) = if i == 0 {
            (first_page, first_layer)
        } else {
            // New page for every slide after the first; the last slide never
            // leaves a trailing blank page
            doc.add_page(Mm(PAGE_W_MM), Mm(PAGE_H_MM), format!("Slide {}", i + 1))
        };
        let layer = doc.get_page(page).get_layer(layer_index);

        layer.use_text(
            deck.title.as_str(),
            TITLE_PT,
            Mm(MARGIN_LEFT_MM),
            Mm(PAGE_H_MM - TITLE_Y_MM),
            &font,
        );
        layer.use_text(
            slide.title.as_str(),
            SLIDE_TITLE_PT,
            Mm(MARGIN_LEFT_MM),
            Mm(PAGE_H_MM - SLIDE_TITLE_Y_MM),
            &font,
        );

        for (n, line) in wrap_to_width(&slide.content, BODY_WIDTH_MM, BODY_PT)
            .iter()
            .enumerate()
        {
            let y = PAGE_H_MM - BODY_Y_MM - n as f32 * line_height_mm;
            if y < BOTTOM_MARGIN_MM {
                // Clip content that runs off the page
                break;
            }
            layer.use_text(line.as_str(), BODY_PT, Mm(MARGIN_LEFT_MM), Mm(y), &font);
        }
    }

    let file = fs::File::create(output_file)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| PitchError::PdfError(e.to_string()))?;

    info!("PDF file created at {:?}", output_file);
    Ok(())
}
