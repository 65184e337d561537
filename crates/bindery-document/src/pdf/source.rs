// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF source — an existing document whose pages are taken as-is during
// assembly, using the `lopdf` crate.

use std::path::Path;

use bindery_core::error::BinderyError;
use lopdf::{Document, ObjectId};
use tracing::{debug, info, instrument};

/// An existing PDF used as one assembly input item.
///
/// Wraps `lopdf::Document`. Pages are never re-laid-out or re-scaled; the
/// assembler copies them verbatim in their original order.
#[derive(Debug)]
pub struct PdfSource {
    document: Document,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<String>,
}

impl PdfSource {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BinderyError> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            BinderyError::Pdf(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self {
            document,
            source_path: Some(path_ref.display().to_string()),
        })
    }

    /// Create a source from raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, BinderyError> {
        let document = Document::load_mem(data).map_err(|err| {
            BinderyError::Pdf(format!("failed to load PDF from memory: {}", err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self {
            document,
            source_path: None,
        })
    }

    /// Wrap an already-loaded lopdf document.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            source_path: None,
        }
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Page object ids in document order.
    pub fn ordered_pages(&self) -> Vec<ObjectId> {
        // get_pages is keyed by 1-indexed page number in a BTreeMap, so the
        // iteration order is the document page order.
        self.document.get_pages().into_values().collect()
    }

    /// Return the source path if the source was created via [`PdfSource::open`].
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    /// Borrow the underlying lopdf document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_pdf_bytes;

    #[test]
    fn from_bytes_counts_pages() {
        let bytes = sample_pdf_bytes(3, 0);
        let source = PdfSource::from_bytes(&bytes).expect("load");
        assert_eq!(source.page_count(), 3);
        assert!(source.source_path().is_none());
    }

    #[test]
    fn ordered_pages_matches_page_count() {
        let bytes = sample_pdf_bytes(4, 7);
        let source = PdfSource::from_bytes(&bytes).expect("load");
        assert_eq!(source.ordered_pages().len(), 4);
    }

    #[test]
    fn open_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sample.pdf");
        std::fs::write(&path, sample_pdf_bytes(2, 0)).expect("write");

        let source = PdfSource::open(&path).expect("open");
        assert_eq!(source.page_count(), 2);
        assert_eq!(source.source_path(), Some(path.display().to_string().as_str()));
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        let err = PdfSource::from_bytes(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, BinderyError::Pdf(_)));
    }
}
