// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Bindery.

use thiserror::Error;

/// Top-level error type for all Bindery operations.
#[derive(Debug, Error)]
pub enum BinderyError {
    // -- Layout errors --
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    // -- Document errors --
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("PDF operation failed: {0}")]
    Pdf(String),

    #[error("image processing failed: {0}")]
    Image(String),

    // -- Assembly errors --
    #[error("nothing to assemble: item list is empty")]
    EmptyInput,

    #[error("document serialization failed: {0}")]
    SerializationFailed(String),

    #[error("output validation failed: expected {expected} pages, got {actual}")]
    ValidationMismatch { expected: usize, actual: usize },

    // -- Configuration / I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BinderyError>;
