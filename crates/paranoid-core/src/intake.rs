//! Contract intake rules: which files are accepted and how drops are detected

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The only accepted contract file extension.
pub const CONTRACT_EXTENSION: &str = "txt";

/// True when `text` has nothing to analyze (empty or whitespace-only).
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Check whether a path carries the `.txt` extension (case-insensitive).
pub fn is_text_contract(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(CONTRACT_EXTENSION))
        .unwrap_or(false)
}

/// Validate that `path` is an existing plain-text contract file.
pub fn validate_contract_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::file_not_found(path));
    }
    if !is_text_contract(path) {
        return Err(Error::unsupported_file(path));
    }
    Ok(())
}

/// Read a contract file fully into memory.
pub fn read_contract_file(path: &Path) -> Result<String> {
    validate_contract_path(path)?;
    Ok(std::fs::read_to_string(path)?)
}

/// Interpret pasted text as a dropped file.
///
/// Terminals turn a file drag-and-drop into a paste of the file's path,
/// sometimes quoted, shell-escaped or as a `file://` URI. Returns the path
/// only when the paste is a single line naming an existing file.
pub fn dropped_path(pasted: &str) -> Option<PathBuf> {
    let trimmed = pasted.trim();
    if trimmed.is_empty() || trimmed.contains('\n') {
        return None;
    }

    let unquoted = strip_quotes(trimmed);
    let without_scheme = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    let candidate = PathBuf::from(without_scheme.replace("\\ ", " "));

    candidate.is_file().then_some(candidate)
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}
