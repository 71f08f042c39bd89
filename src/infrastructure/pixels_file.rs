//! Year in Pixels output file

use crate::domain::YearPixels;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Replace `path` with the grid's line, without a trailing newline.
///
/// The line goes to a temp file next to the destination first and is then
/// renamed into place, so a reader never sees a half-written file.
/// On Windows, `rename` does not overwrite existing files, so the
/// destination is removed first.
pub fn write_pixels(path: &Path, pixels: &YearPixels) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.pixels-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("pixels.txt"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(e) = replace_with(&tmp_path, path, &pixels.to_line()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    tracing::debug!(path = %path.display(), year = pixels.year(), "wrote year in pixels");
    Ok(())
}

fn replace_with(tmp_path: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(tmp_path, content)?;

    if cfg!(windows) && path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(tmp_path, path)
}
