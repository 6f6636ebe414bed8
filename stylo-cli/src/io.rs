//! File I/O for the terminal host

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use stylo_core::{Document, SpanSelection};

/// Load a text file and create a Document
pub fn load_file(path: &str) -> Result<Document> {
    let path = Path::new(path);
    let canonical = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;

    let content = fs::read_to_string(&canonical)
        .with_context(|| format!("Failed to read file: {}", canonical.display()))?;

    let filepath = canonical.to_string_lossy().to_string();
    let filename = canonical
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = canonical
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    Ok(Document::with_file_info(title, content, filepath, filename))
}

/// Get the ~/.stylo directory path, creating it if needed
pub fn stylo_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let stylo_dir = home.join(".stylo");

    if !stylo_dir.exists() {
        fs::create_dir_all(&stylo_dir)
            .with_context(|| format!("Failed to create {}", stylo_dir.display()))?;
    }

    Ok(stylo_dir)
}

/// Export committed spans to ~/.stylo/spans.json
pub fn export_spans(doc: &Document, selection: &SpanSelection) -> Result<PathBuf> {
    let stylo_dir = stylo_dir()?;
    let export_path = stylo_dir.join("spans.json");

    let json = stylo_core::to_json(doc, selection).context("Failed to serialize spans")?;

    fs::write(&export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    Ok(export_path)
}
