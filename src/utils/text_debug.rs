// src/utils/text_debug.rs
use std::fs;
use std::path::Path;
use crate::utils::error::AppError;

/// Saves extracted statement text to a file with inline `[[label:...]]` markers
/// around each highlighted span.
pub fn save_debug_text(text: &str, path: &Path, highlights: &[(usize, usize, &str)]) -> Result<(), AppError> {
    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);

    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| (h.0, h.1)); // Sort by position

    for (start, end, label) in sorted_highlights {
        // Overlapping matches would duplicate text; keep the first one
        if start < last_pos {
            tracing::trace!("Skipping overlapping highlight '{}' at {}-{}", label, start, end);
            continue;
        }

        annotated.push_str(&text[last_pos..start]);
        annotated.push_str("[[");
        annotated.push_str(label);
        annotated.push(':');
        annotated.push_str(&text[start..end]);
        annotated.push_str("]]");

        last_pos = end;
    }

    // Add any remaining content
    annotated.push_str(&text[last_pos..]);

    fs::write(path, annotated)?;

    tracing::info!("Saved annotated debug text to {}", path.display());
    Ok(())
}

/// Creates an annotated copy of the statement text with every match of the given
/// regex patterns marked.
pub fn create_debug_text(text: &str, path: &Path, patterns: &[(&str, &str)]) -> Result<(), AppError> {
    use regex::Regex;

    let mut highlights = Vec::new();

    for (pattern, label) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;

        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *label));
        }
    }

    save_debug_text(text, path, &highlights)
}
