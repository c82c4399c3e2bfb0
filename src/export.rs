use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::ExportError;

/// Extension appended when the chosen path has none we recognize
pub const DEFAULT_EXTENSION: &str = "png";

/// Returns `path` with `.png` appended unless it already ends in `.png` (any case).
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DEFAULT_EXTENSION));

    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(DEFAULT_EXTENSION);
        PathBuf::from(name)
    }
}

/// Encodes the live canvas and writes it to `path`, normalizing the extension first.
///
/// Returns the path actually written. The document is never modified.
pub fn save_png(document: &Document, path: &Path) -> Result<PathBuf, ExportError> {
    let path = with_png_extension(path);
    let bytes = document.encode_png()?;
    std::fs::write(&path, bytes)?;
    log::info!("Saved drawing to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_extension_is_appended() {
        assert_eq!(with_png_extension(Path::new("/tmp/drawing")), PathBuf::from("/tmp/drawing.png"));
        assert_eq!(
            with_png_extension(Path::new("/tmp/drawing.jpg")),
            PathBuf::from("/tmp/drawing.jpg.png")
        );
        assert_eq!(with_png_extension(Path::new("art.v2")), PathBuf::from("art.v2.png"));
    }

    #[test]
    fn test_png_extension_is_kept() {
        assert_eq!(with_png_extension(Path::new("/tmp/drawing.png")), PathBuf::from("/tmp/drawing.png"));
        assert_eq!(with_png_extension(Path::new("DRAWING.PNG")), PathBuf::from("DRAWING.PNG"));
    }

    #[test]
    fn test_save_uninitialized_fails() {
        let document = Document::new();
        let path = std::env::temp_dir().join("digicanvas_uninitialized_export.png");
        assert!(matches!(save_png(&document, &path), Err(ExportError::NotInitialized)));
        assert!(!path.exists());
    }
}
