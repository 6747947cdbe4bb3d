use std::fmt::Write;

use clap::ValueEnum;
use intake_core::StoredRecord;
use intake_processing::PreviewEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Html,
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Show an RFC 3339 timestamp as `YYYY-MM-DD HH:MM:SS`; anything else verbatim.
pub fn format_created_at(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Snippets are shown on one line in tables
fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn preview_table(previews: &[PreviewEntry]) -> String {
    let mut out = String::from("\n=== Previews ===\n");

    if previews.is_empty() {
        out.push_str("\nNo files selected.\n");
        return out;
    }

    let _ = writeln!(out, "\n{:<30} {:<8} {:<60}", "Name", "Kind", "Preview");
    let _ = writeln!(out, "{}", "-".repeat(100));

    for entry in previews {
        let (kind, detail) = match entry {
            PreviewEntry::Image { preview_url, .. } => ("image", preview_url.to_string()),
            PreviewEntry::Text { text_snippet, .. } => ("text", flatten(text_snippet)),
            PreviewEntry::Opaque { .. } => ("other", String::new()),
        };
        let _ = writeln!(
            out,
            "{:<30} {:<8} {:<60}",
            truncate_string(entry.name(), 30),
            kind,
            truncate_string(&detail, 60)
        );
    }

    out
}

pub fn record_table(records: &[StoredRecord]) -> String {
    let mut out = String::from("\n=== Stored Files ===\n");
    let _ = writeln!(out, "Total: {} items", records.len());

    if records.is_empty() {
        out.push_str("\nNo files found.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "\n{:<12} {:<30} {:<50} {:>20}",
        "ID", "Name", "URL", "Created At"
    );
    let _ = writeln!(out, "{}", "-".repeat(115));

    for record in records {
        let _ = writeln!(
            out,
            "{:<12} {:<30} {:<50} {:>20}",
            truncate_string(&record.id, 12),
            truncate_string(&record.name, 30),
            truncate_string(&record.url, 50),
            format_created_at(&record.created_at)
        );
    }

    out
}

/// Initialize tracing for the CLI.
///
/// `INTAKE_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = std::env::var("INTAKE_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
