// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Bindery document assembly.

use serde::{Deserialize, Serialize};

use crate::error::{BinderyError, Result};

/// Fixed canvas onto which a generated page is drawn.
///
/// All values are PDF points (1/72 inch). The `margin` is a uniform inset on
/// all four sides; the area inside it is the printable area an image may
/// occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 at 595x842 points with a 40pt margin.
    pub fn a4() -> Self {
        Self {
            width: 595.0,
            height: 842.0,
            margin: 40.0,
        }
    }

    /// US Letter at 612x792 points with a 40pt margin.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 40.0,
        }
    }

    /// Custom page dimensions in points.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Return the same page with a different margin.
    pub fn with_margin(self, margin: f32) -> Self {
        Self { margin, ..self }
    }

    /// Check the page invariants: finite positive dimensions, a non-negative
    /// margin, and a non-empty printable area (`2 * margin` must stay below
    /// both page dimensions).
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err(BinderyError::InvalidGeometry(format!(
                "page dimensions must be finite, got {}x{} margin {}",
                self.width, self.height, self.margin
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(BinderyError::InvalidGeometry(format!(
                "page dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.margin < 0.0 {
            return Err(BinderyError::InvalidGeometry(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.margin * 2.0 >= self.width || self.margin * 2.0 >= self.height {
            return Err(BinderyError::InvalidGeometry(format!(
                "margin {} leaves no printable area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Width of the printable area (page width inset by the margin twice).
    pub fn printable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Height of the printable area.
    pub fn printable_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Position and size at which an image is drawn on a generated page.
///
/// Coordinates follow the PDF convention with the origin at the bottom-left
/// of the page. The placement is centred, so it is identical under a top-left
/// convention as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// What to do with an item whose dimensions fail layout during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InvalidItemPolicy {
    /// Fail the whole assembly on the first bad item.
    #[default]
    Abort,
    /// Drop the bad item with a warning and keep going.
    Skip,
}

/// Coarse classification of an input file for assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Pdf,
    Image,
}

impl InputKind {
    /// Infer the input kind from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "tif" | "tiff" | "webp" => Some(Self::Image),
            _ => None,
        }
    }
}
