// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image page rendering — one raster image drawn at a computed placement on a
// fresh page, using `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: a page is a `PdfPage` holding a
// `Vec<Op>` operation list, and the document serialises via
// `PdfDocument::save()`.

use bindery_core::types::{PageGeometry, PlacementRect};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use tracing::{debug, instrument};

use crate::image::source::ImageSource;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Render a single-page PDF with `image` drawn into `placement` on a
/// `page`-sized canvas.
///
/// The caller computed the placement; this function only executes it. The
/// placement coordinates are points with a bottom-left origin, matching the
/// PDF content coordinate space.
#[instrument(skip(page, image, placement), fields(px_w = image.width(), px_h = image.height()))]
pub fn render_image_page(
    page: &PageGeometry,
    image: &ImageSource,
    placement: PlacementRect,
    title: &str,
) -> Vec<u8> {
    let rgb = image.as_dynamic().to_rgb8();
    let px_width = image.width() as usize;
    let px_height = image.height() as usize;

    let raw = RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: px_width,
        height: px_height,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    };

    let mut doc = PdfDocument::new(title);
    let xobject_id = doc.add_image(&raw);

    // At 72 dpi the image's native size is one point per pixel, so the
    // uniform placement scale is the placement width over the pixel width.
    let scale = placement.width / px_width as f32;

    let ops = vec![Op::UseXobject {
        id: xobject_id,
        transform: XObjectTransform {
            translate_x: Some(Pt(placement.x)),
            translate_y: Some(Pt(placement.y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
            rotate: None,
        },
    }];

    let pdf_page = PdfPage::new(
        Mm(page.width * MM_PER_PT),
        Mm(page.height * MM_PER_PT),
        ops,
    );
    doc.with_pages(vec![pdf_page]);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

    debug!(bytes_len = bytes.len(), scale, "Image page rendered");
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_image;
    use bindery_core::layout::compute_placement;

    #[test]
    fn rendered_page_reloads_with_one_page() {
        let page = PageGeometry::a4();
        let image = sample_image(320, 240);
        let placement =
            compute_placement(&page, image.width() as f32, image.height() as f32)
                .expect("placement");

        let bytes = render_image_page(&page, &image, placement, "render test");
        let reloaded = lopdf::Document::load_mem(&bytes).expect("reload");
        assert_eq!(reloaded.get_pages().len(), 1);
    }
}
