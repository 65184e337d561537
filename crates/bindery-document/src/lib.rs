// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// bindery-document — Document assembly for Bindery.
//
// Provides image input handling (decode, intrinsic dimensions), PDF input
// handling (lopdf), image-page rendering (printpdf), and the assembler that
// folds an ordered list of images and PDFs into one output document.

pub mod assemble;
pub mod image;
pub mod pdf;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export the primary types so callers can use `bindery_document::DocumentAssembler` etc.
pub use assemble::{DocumentAssembler, DocumentSink, MergeableItem};
pub use self::image::source::ImageSource;
pub use pdf::sink::{AssembledPdf, PdfSink};
pub use pdf::source::PdfSource;
