// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembly — a single synchronous pass that folds an ordered list of
// images and PDFs into one output document.
//
// Image items get one generated page each, placed by the layout engine;
// document items contribute all of their pages verbatim, in their original
// order. The fold is written against the `DocumentSink` trait so the
// algorithm stays independent of the PDF backend; `PdfSink` is the production
// implementation.

use bindery_core::config::AssemblyConfig;
use bindery_core::error::{BinderyError, Result};
use bindery_core::layout;
use bindery_core::types::{InvalidItemPolicy, PageGeometry, PlacementRect};
use tracing::{info, instrument, warn};

use crate::image::source::ImageSource;
use crate::pdf::sink::{AssembledPdf, PdfSink};
use crate::pdf::source::PdfSource;

/// One unit of assembly input: a single image or a whole existing document.
pub enum MergeableItem {
    Image(ImageSource),
    Document(PdfSource),
}

/// Receiver for assembled pages.
///
/// The assembler only drives a sink; the production implementation
/// accumulates a PDF, while tests can record what was appended.
pub trait DocumentSink {
    /// Append one generated page with `image` drawn into `placement`.
    fn append_image_page(
        &mut self,
        page: &PageGeometry,
        image: &ImageSource,
        placement: PlacementRect,
    ) -> Result<()>;

    /// Append every page of `source`, unmodified, in its original order.
    fn append_document_pages(&mut self, source: &PdfSource) -> Result<()>;

    /// Pages appended so far.
    fn page_count(&self) -> usize;
}

/// Folds ordered mergeable items into one output document.
///
/// The pass is synchronous and non-reentrant: inputs are borrowed read-only,
/// the sink owns the output exclusively, and nothing is observable until the
/// pass returns. An empty item list is rejected with
/// [`BinderyError::EmptyInput`] rather than producing a zero-page document.
pub struct DocumentAssembler {
    config: AssemblyConfig,
}

impl DocumentAssembler {
    pub fn new(config: AssemblyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    /// Assemble into the production PDF sink.
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn assemble(&self, items: &[MergeableItem]) -> Result<AssembledPdf> {
        let mut sink = self.new_sink();
        self.assemble_into(items, &mut sink)?;
        let assembled = sink.finish();
        info!(pages = assembled.page_count(), "Assembly complete");
        Ok(assembled)
    }

    /// Single-source specialisation: every input is an image, one page each.
    #[instrument(skip_all, fields(images = images.len()))]
    pub fn assemble_from_images(&self, images: &[ImageSource]) -> Result<AssembledPdf> {
        self.config.page.validate()?;
        if images.is_empty() {
            return Err(BinderyError::EmptyInput);
        }

        let mut sink = self.new_sink();
        for (index, image) in images.iter().enumerate() {
            self.append_image(index, image, &mut sink)?;
        }
        let assembled = sink.finish();
        info!(pages = assembled.page_count(), "Assembly complete");
        Ok(assembled)
    }

    /// The assembly fold itself, against an arbitrary sink.
    ///
    /// Returns the number of pages appended. Exposed so embedders can target
    /// a different backend than [`PdfSink`].
    pub fn assemble_into<S: DocumentSink>(
        &self,
        items: &[MergeableItem],
        sink: &mut S,
    ) -> Result<usize> {
        self.config.page.validate()?;
        if items.is_empty() {
            return Err(BinderyError::EmptyInput);
        }

        let before = sink.page_count();
        for (index, item) in items.iter().enumerate() {
            match item {
                MergeableItem::Image(image) => {
                    self.append_image(index, image, sink)?;
                }
                MergeableItem::Document(source) => {
                    sink.append_document_pages(source)?;
                }
            }
        }
        Ok(sink.page_count() - before)
    }

    /// Append one image page, honouring the invalid-item policy.
    fn append_image<S: DocumentSink>(
        &self,
        index: usize,
        image: &ImageSource,
        sink: &mut S,
    ) -> Result<()> {
        let placement = match layout::compute_placement(
            &self.config.page,
            image.width() as f32,
            image.height() as f32,
        ) {
            Ok(placement) => placement,
            Err(err @ BinderyError::InvalidGeometry(_))
                if self.config.on_invalid_item == InvalidItemPolicy::Skip =>
            {
                warn!(index, %err, "Skipping item with invalid dimensions");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        sink.append_image_page(&self.config.page, image, placement)
    }

    fn new_sink(&self) -> PdfSink {
        PdfSink::new(self.config.title.as_deref().unwrap_or("Bindery Document"))
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(AssemblyConfig::default())
    }
}
