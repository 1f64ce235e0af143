use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Write to a temp file in the same directory, then rename over `path`.
///
/// The temp file is created owner-only (files hold patient data) and is
/// removed if any step before the rename fails.
pub fn write_atomic(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
