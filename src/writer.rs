use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Writes rendered changelog text to `path`.
///
/// The file is created if missing and truncated otherwise. Content is written
/// through a buffer and flushed before returning, so a flush failure is
/// reported like any other I/O error.
///
/// # Arguments
/// * `path` - Target changelog file
/// * `content` - Fully rendered changelog
///
/// # Returns
/// * `Ok(())` - Content written and flushed
/// * `Err` - If the file cannot be created or written
pub fn write_changelog(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    debug!(path = %path.display(), bytes = content.len(), "wrote changelog");
    Ok(())
}
