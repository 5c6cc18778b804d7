//! String tables — flat `key -> text` JSON files, one per locale.

use indexmap::IndexMap;
use std::io::Write;
use std::path::Path;

use crate::error::PolyglotError;

/// Ordered `key -> text` mapping. Iteration follows file order.
pub type StringTable = IndexMap<String, String>;

/// Read a string table from a UTF-8 JSON object of string values.
pub fn load(path: &Path) -> Result<StringTable, PolyglotError> {
    if !path.exists() {
        return Err(PolyglotError::Table(format!(
            "source file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| PolyglotError::Table(format!("failed to parse {}: {e}", path.display())))
}

/// Render a table as pretty JSON with non-ASCII text kept literal.
pub fn to_json(table: &StringTable) -> Result<String, PolyglotError> {
    let mut out = serde_json::to_string_pretty(table)?;
    out.push('\n');
    Ok(out)
}

/// Write `table` to `path` through a temp file in the same directory.
///
/// The target is replaced only once the new content is fully on disk, so a
/// failed write leaves any previous file untouched.
pub fn save(path: &Path, table: &StringTable) -> Result<(), PolyglotError> {
    let json = to_json(table)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| PolyglotError::Io(e.error))?;
    Ok(())
}
