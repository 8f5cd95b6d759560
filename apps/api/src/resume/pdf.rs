//! PDF text extraction for uploaded resumes.
//!
//! Pages are extracted individually so one blank or image-only page does not
//! sink the whole document. Extraction is CPU-bound and runs on the blocking pool.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

/// Below this many characters the PDF is probably scanned images.
const SHORT_TEXT_WARNING_CHARS: usize = 50;

static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").expect("valid regex"));
static PADDED_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?\n ?").expect("valid regex"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Invalid or corrupted PDF file: {0}")]
    Corrupt(String),

    #[error("PDF file contains no pages")]
    NoPages,

    #[error("PDF file contains no extractable text")]
    NoText,
}

/// Extracts the text of a PDF held in memory.
///
/// Pages are joined with a blank line, which the chunker treats as its
/// strongest boundary marker.
pub async fn extract_resume_text(bytes: Vec<u8>) -> Result<String, ExtractionError> {
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
            .map_err(|e| ExtractionError::Corrupt(e.to_string()))
    })
    .await
    // pdf-extract panics on some malformed inputs; the join error carries that panic.
    .map_err(|e| ExtractionError::Corrupt(format!("extractor aborted: {e}")))??;

    join_pages(pages)
}

/// Cleans each page, skips the empty ones, and joins the rest.
pub fn join_pages(pages: Vec<String>) -> Result<String, ExtractionError> {
    if pages.is_empty() {
        return Err(ExtractionError::NoPages);
    }

    let total_pages = pages.len();
    let mut kept = Vec::with_capacity(total_pages);

    for (index, page) in pages.iter().enumerate() {
        let cleaned = clean_page_text(page);
        if cleaned.is_empty() {
            warn!(
                "Page {} appears to be blank or contains no extractable text",
                index + 1
            );
            continue;
        }
        kept.push(cleaned);
    }

    if kept.is_empty() {
        return Err(ExtractionError::NoText);
    }

    let text = kept.join("\n\n");

    if text.chars().count() < SHORT_TEXT_WARNING_CHARS {
        warn!("Extracted text is very short. PDF may be image-based or corrupted.");
    }

    info!(
        "Extracted {} characters from {}/{} pages",
        text.chars().count(),
        kept.len(),
        total_pages
    );

    Ok(text)
}

/// Collapses runs of horizontal whitespace and excess blank lines.
fn clean_page_text(page: &str) -> String {
    let text = HORIZONTAL_WHITESPACE.replace_all(page.trim(), " ");
    let text = PADDED_NEWLINE.replace_all(&text, "\n");
    EXCESS_NEWLINES
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}
