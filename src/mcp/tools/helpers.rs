//! Formatting helpers shared by the MCP tools

use crate::core::types::{DocumentMetadata, DocumentStatus};

/// Format bytes as human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Cut text after `max_chars` characters, noting how much was dropped
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let total = text.chars().count();
    if total <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!(
        "{}...\n\n[Truncated {} chars]",
        truncated,
        total - max_chars
    )
}

/// One markdown table row for a document
pub fn document_row(doc: &DocumentMetadata) -> String {
    let status = match doc.status {
        DocumentStatus::Ready => "ready".to_string(),
        DocumentStatus::Processing => "processing".to_string(),
        DocumentStatus::Error => format!(
            "error: {}",
            doc.error_message.as_deref().unwrap_or("unknown")
        ),
    };

    format!(
        "| `{}` | {} | {} | {} | {} |\n",
        doc.id,
        doc.filename.replace('|', "\\|"),
        format_bytes(doc.file_size),
        status,
        doc.created_at.format("%Y-%m-%d %H:%M UTC")
    )
}
