// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page layout — fit-and-centre placement of a raster image on a page canvas.

use crate::error::{BinderyError, Result};
use crate::types::{PageGeometry, PlacementRect};

/// Compute the rectangle an image is drawn into on a generated page.
///
/// The image is uniformly scaled by `min(printable_w / image_w,
/// printable_h / image_h)` so it fits the printable area in both dimensions
/// without cropping or distortion, then centred on the full page. Exactly one
/// dimension touches the printable-area boundary unless the aspect ratios
/// match, in which case both do. Images smaller than the printable area are
/// scaled up.
pub fn compute_placement(
    page: &PageGeometry,
    image_width: f32,
    image_height: f32,
) -> Result<PlacementRect> {
    page.validate()?;
    if !(image_width.is_finite()
        && image_height.is_finite()
        && image_width > 0.0
        && image_height > 0.0)
    {
        return Err(BinderyError::InvalidGeometry(format!(
            "image dimensions must be positive, got {image_width}x{image_height}"
        )));
    }

    let width_scale = page.printable_width() / image_width;
    let height_scale = page.printable_height() / image_height;
    let scale = width_scale.min(height_scale);

    let width = image_width * scale;
    let height = image_height * scale;

    Ok(PlacementRect {
        x: (page.width - width) / 2.0,
        y: (page.height - height) / 2.0,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < TOLERANCE, "expected {b}, got {a}");
    }

    /// The placement must sit fully inside the printable area.
    fn assert_contained(page: &PageGeometry, rect: &PlacementRect) {
        assert!(rect.x >= page.margin - TOLERANCE);
        assert!(rect.y >= page.margin - TOLERANCE);
        assert!(rect.x + rect.width <= page.width - page.margin + TOLERANCE);
        assert!(rect.y + rect.height <= page.height - page.margin + TOLERANCE);
    }

    #[test]
    fn wide_image_pins_printable_width() {
        let page = PageGeometry::a4();
        // 2:1 landscape image on a portrait page.
        let rect = compute_placement(&page, 2000.0, 1000.0).expect("placement");

        assert_close(rect.width, page.printable_width());
        assert!(rect.height < page.printable_height());
        assert_contained(&page, &rect);
    }

    #[test]
    fn tall_image_pins_printable_height() {
        let page = PageGeometry::a4();
        let rect = compute_placement(&page, 500.0, 4000.0).expect("placement");

        assert_close(rect.height, page.printable_height());
        assert!(rect.width < page.printable_width());
        assert_contained(&page, &rect);
    }

    #[test]
    fn matching_aspect_ratio_fills_printable_area() {
        // Page whose printable area is exactly 2:1.
        let page = PageGeometry::new(240.0, 140.0, 20.0);
        let rect = compute_placement(&page, 600.0, 300.0).expect("placement");

        assert_close(rect.width, page.printable_width());
        assert_close(rect.height, page.printable_height());
    }

    #[test]
    fn placement_preserves_aspect_ratio() {
        let page = PageGeometry::a4();
        let (w, h) = (1234.0, 789.0);
        let rect = compute_placement(&page, w, h).expect("placement");

        assert_close(rect.width / rect.height, w / h);
    }

    #[test]
    fn placement_is_centred() {
        let page = PageGeometry::a4();
        let rect = compute_placement(&page, 800.0, 600.0).expect("placement");

        assert_close(rect.x * 2.0 + rect.width, page.width);
        assert_close(rect.y * 2.0 + rect.height, page.height);
    }

    #[test]
    fn small_image_is_scaled_up_to_fit() {
        let page = PageGeometry::a4();
        let rect = compute_placement(&page, 50.0, 50.0).expect("placement");

        // Square image on a portrait page: width is the limiting dimension.
        assert_close(rect.width, page.printable_width());
        assert_close(rect.height, page.printable_width());
    }

    #[test]
    fn same_inputs_give_identical_output() {
        let page = PageGeometry::a4();
        let a = compute_placement(&page, 1024.0, 768.0).expect("placement");
        let b = compute_placement(&page, 1024.0, 768.0).expect("placement");
        assert_eq!(a, b);
    }

    #[test]
    fn zero_or_negative_image_dimensions_are_rejected() {
        let page = PageGeometry::a4();
        assert!(matches!(
            compute_placement(&page, 0.0, 100.0),
            Err(BinderyError::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_placement(&page, 100.0, -3.0),
            Err(BinderyError::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_placement(&page, f32::NAN, 100.0),
            Err(BinderyError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn malformed_page_is_rejected() {
        let page = PageGeometry::new(100.0, 100.0, 60.0);
        assert!(matches!(
            compute_placement(&page, 100.0, 100.0),
            Err(BinderyError::InvalidGeometry(_))
        ));
    }
}
