// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module — reading existing documents, rendering image pages, and
// accumulating the merged output.

pub mod copy;
pub mod render;
pub mod sink;
pub mod source;

pub use sink::{AssembledPdf, PdfSink};
pub use source::PdfSource;
