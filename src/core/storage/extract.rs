//! Plain-text extraction and cleanup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

static PDF_STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").expect("valid regex"));

static PDF_STREAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)stream[\r\n]+(.*?)[\r\n]+endstream").expect("valid regex")
});

static HAS_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]{3,}").expect("valid regex"));

/// MIME type routed through [`extract_pdf_text`]
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Below this many chars the PDF heuristics are considered to have failed
const MIN_PDF_TEXT_CHARS: usize = 100;

/// Streams shorter than this are treated as binary noise
const MIN_PDF_STREAM_CHARS: usize = 50;

/// Clean raw file bytes into searchable text
///
/// Decodes UTF-8 lossily, collapses whitespace runs to a single space,
/// removes anything outside printable ASCII (keeping `\n` and `\r`),
/// trims, and keeps at most `max_chars` characters.
pub fn clean_text(raw: &[u8], max_chars: usize) -> String {
    let decoded = String::from_utf8_lossy(raw);
    let collapsed = WHITESPACE_RUN.replace_all(&decoded, " ");

    let printable: String = collapsed
        .chars()
        .filter(|c| matches!(c, ' '..='~' | '\n' | '\r'))
        .collect();

    printable.trim().chars().take(max_chars).collect()
}

/// Best-effort text from a PDF without a real parser
///
/// Collects parenthesized string literals that hold at least two chars
/// and an ASCII letter or digit, then appends the printable content of
/// every `stream ... endstream` block longer than 50 chars that contains
/// a word. When that yields fewer than 100 chars a placeholder naming
/// `label` is used instead, so the document stays findable by name.
/// The result goes through [`clean_text`].
pub fn extract_pdf_text(raw: &[u8], label: &str, max_chars: usize) -> String {
    let decoded = String::from_utf8_lossy(raw);

    let mut extracted = PDF_STRING
        .captures_iter(&decoded)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| s.chars().count() > 1 && s.chars().any(|c| c.is_ascii_alphanumeric()))
        .collect::<Vec<_>>()
        .join(" ");

    for caps in PDF_STREAM.captures_iter(&decoded) {
        let Some(body) = caps.get(1) else { continue };
        let printable: String = body
            .as_str()
            .chars()
            .map(|c| {
                if matches!(c, ' '..='~') || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        let stream_text = WHITESPACE_RUN.replace_all(&printable, " ");
        let stream_text = stream_text.trim();

        if stream_text.chars().count() > MIN_PDF_STREAM_CHARS && HAS_WORD.is_match(stream_text) {
            extracted.push(' ');
            extracted.push_str(stream_text);
        }
    }

    if extracted.chars().count() < MIN_PDF_TEXT_CHARS {
        tracing::debug!("No readable text in PDF {}, using placeholder", label);
        extracted = format!(
            "[PDF Document: {label}]\n\n\
             This PDF document has been uploaded to Vault. Its content is formatted \
             in a way that needs advanced parsing, so it is indexed by filename.\n\n\
             Document uploaded successfully and ready for analysis."
        );
    }

    clean_text(extracted.as_bytes(), max_chars)
}

/// Guess a MIME type from the file extension
pub fn guess_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_text_plain()
        .essence_str()
        .to_string()
}
