// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output accumulation — generated and copied pages collect into one lopdf
// document, which finalises into a validated byte stream.

use std::path::Path;

use bindery_core::error::BinderyError;
use bindery_core::types::{PageGeometry, PlacementRect};
use lopdf::{Document, Object, dictionary};
use tracing::{debug, info, instrument};

use crate::assemble::DocumentSink;
use crate::image::source::ImageSource;
use crate::pdf::copy::ObjectImporter;
use crate::pdf::render;
use crate::pdf::source::PdfSource;

/// Production sink: accumulates pages into a `lopdf::Document`.
///
/// Generated image pages are rendered with printpdf, reloaded, and imported;
/// pages of existing documents are imported directly, unmodified.
pub struct PdfSink {
    document: Document,
    pages_written: usize,
    title: String,
}

impl PdfSink {
    /// Create an empty sink: a catalog and a page tree with no pages yet.
    pub fn new(title: impl Into<String>) -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Vec::<Object>::new(),
                "Count" => 0,
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        Self {
            document,
            pages_written: 0,
            title: title.into(),
        }
    }

    /// Finish accumulation and hand over the assembled document.
    pub fn finish(self) -> AssembledPdf {
        AssembledPdf {
            document: self.document,
            page_count: self.pages_written,
        }
    }
}

impl DocumentSink for PdfSink {
    fn append_image_page(
        &mut self,
        page: &PageGeometry,
        image: &ImageSource,
        placement: PlacementRect,
    ) -> Result<(), BinderyError> {
        let bytes = render::render_image_page(page, image, placement, &self.title);
        let rendered = Document::load_mem(&bytes)
            .map_err(|err| BinderyError::Pdf(format!("rendered page does not reload: {}", err)))?;

        let page_ids: Vec<_> = rendered.get_pages().into_values().collect();
        let mut importer = ObjectImporter::new(&rendered);
        for page_id in page_ids {
            importer.import_page(&mut self.document, page_id)?;
        }

        self.pages_written += 1;
        Ok(())
    }

    fn append_document_pages(&mut self, source: &PdfSource) -> Result<(), BinderyError> {
        let mut importer = ObjectImporter::new(source.document());
        for page_id in source.ordered_pages() {
            importer.import_page(&mut self.document, page_id)?;
        }

        self.pages_written += source.page_count();
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages_written
    }
}

/// The finalised output of one assembly pass.
///
/// Owns the accumulated document. `to_bytes` serialises it and re-parses the
/// produced stream to confirm the page count before any bytes are handed out;
/// a failed check surfaces an error and no partial output escapes.
#[derive(Debug)]
pub struct AssembledPdf {
    document: Document,
    page_count: usize,
}

impl AssembledPdf {
    /// Number of pages in the assembled document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Serialise to a byte stream and validate it.
    #[instrument(skip(self), fields(pages = self.page_count))]
    pub fn to_bytes(&self) -> Result<Vec<u8>, BinderyError> {
        let mut document = self.document.clone();
        let mut bytes = Vec::new();
        document
            .save_to(&mut bytes)
            .map_err(|err| BinderyError::SerializationFailed(err.to_string()))?;

        let reparsed = Document::load_mem(&bytes).map_err(|err| {
            BinderyError::SerializationFailed(format!("produced stream does not reparse: {}", err))
        })?;
        let actual = reparsed.get_pages().len();
        if actual != self.page_count {
            return Err(BinderyError::ValidationMismatch {
                expected: self.page_count,
                actual,
            });
        }

        debug!(bytes_len = bytes.len(), "Document serialised and validated");
        Ok(bytes)
    }

    /// Serialise and write directly to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), BinderyError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote assembled PDF to {}", path.as_ref().display());
        Ok(())
    }
}
