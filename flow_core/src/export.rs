//! # Export Utilities
//!
//! Download filename resolution and the file-save capability the GUI injects.
//! Writing is behind the [`ExportSink`] trait so the export path is testable
//! without a desktop environment; clipboard writes go through the GUI
//! toolkit's own clipboard task and never reach this module.

use std::path::Path;

use tracing::info;

use crate::errors::{FlowError, FlowResult};
use crate::languages::extension_for_key;

/// Suggested filename for downloading a language's generated code.
///
/// A pure function of the language key: `code.py`, `code.rs`, ... with
/// unknown keys degrading to `code.txt`.
pub fn download_filename(language_key: &str) -> String {
    format!("code.{}", extension_for_key(language_key))
}

/// Destination for exported files.
pub trait ExportSink {
    /// Write `contents` to `path`, replacing any existing file.
    fn save(&mut self, path: &Path, contents: &[u8]) -> FlowResult<()>;
}

/// Filesystem-backed sink used by the desktop app.
#[derive(Debug, Default)]
pub struct DiskSink;

impl ExportSink for DiskSink {
    fn save(&mut self, path: &Path, contents: &[u8]) -> FlowResult<()> {
        std::fs::write(path, contents).map_err(|e| {
            FlowError::file_error("write", path.display().to_string(), e.to_string())
        })?;
        info!(path = %path.display(), bytes = contents.len(), "exported file");
        Ok(())
    }
}

/// Export one language's code through the given sink.
pub fn export_code(sink: &mut dyn ExportSink, path: &Path, code: &str) -> FlowResult<()> {
    sink.save(path, code.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_download_filename_per_catalog() {
        assert_eq!(download_filename("python"), "code.py");
        assert_eq!(download_filename("csharp"), "code.cs");
        assert_eq!(download_filename("typescript"), "code.ts");
    }

    #[test]
    fn test_unknown_key_gets_safe_extension() {
        assert_eq!(download_filename("cobol"), "code.txt");
        assert_eq!(download_filename(""), "code.txt");
    }

    #[test]
    fn test_export_through_mock_sink() {
        struct MemorySink {
            saved: Vec<(PathBuf, Vec<u8>)>,
        }
        impl ExportSink for MemorySink {
            fn save(&mut self, path: &Path, contents: &[u8]) -> FlowResult<()> {
                self.saved.push((path.to_path_buf(), contents.to_vec()));
                Ok(())
            }
        }

        let mut sink = MemorySink { saved: Vec::new() };
        export_code(&mut sink, Path::new("code.py"), "print('hi')").unwrap();
        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0].1, b"print('hi')");
    }

    #[test]
    fn test_disk_sink_roundtrip() {
        let path = std::env::temp_dir().join("polyflow_export_test.py");
        let mut sink = DiskSink;
        export_code(&mut sink, &path, "def f(): pass").unwrap();
        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, "def f(): pass");
        let _ = std::fs::remove_file(&path);
    }
}
