//! Document loading
//!
//! Turns a file on disk into the plain text the triage pipeline consumes.
//! Plain-text files are read as UTF-8; PDFs go through `pdf-extract`, one
//! string per page, joined with newlines so labels never run together
//! across a page break.

use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Document formats the loader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Text,
    Pdf,
}

impl DocumentFormat {
    /// Determines the format from the file extension, ignoring case
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentFormat::Text),
            "pdf" => Ok(DocumentFormat::Pdf),
            "" => Err(LoadError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(LoadError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Loads FNOL documents from disk
pub struct DocumentLoader;

impl DocumentLoader {
    /// Reads the document at `path` and returns its text
    ///
    /// # Errors
    ///
    /// * `LoadError::UnsupportedFormat` for anything other than `.txt` or `.pdf`
    /// * `LoadError::Io` if the file cannot be read or a text file is not UTF-8
    /// * `LoadError::PdfParsing` if the PDF has no readable text layer structure
    pub fn load(path: &Path) -> Result<String, LoadError> {
        let format = DocumentFormat::from_path(path)?;
        tracing::debug!(path = %path.display(), ?format, "Loading document");

        let text = match format {
            DocumentFormat::Text => fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?,
            DocumentFormat::Pdf => {
                let bytes = fs::read(path).map_err(|source| LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::pdf_text(&bytes)?
            }
        };

        tracing::debug!(chars = text.len(), "Document loaded");
        Ok(text)
    }

    fn pdf_text(bytes: &[u8]) -> Result<String, LoadError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| LoadError::PdfParsing(e.to_string()))?;
        tracing::debug!(pages = pages.len(), "Extracted PDF text");
        Ok(pages.join("\n"))
    }
}
