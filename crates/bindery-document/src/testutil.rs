// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared in-memory fixtures for the document crate's tests.

use ::image::{DynamicImage, Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use crate::image::source::ImageSource;
use crate::pdf::source::PdfSource;

/// Drawing operations for one fixture page. The `tag` offsets the coordinates
/// so pages from different fixture documents have distinct content streams.
fn page_operations(index: i64, tag: i64) -> Vec<Operation> {
    vec![
        Operation::new("m", vec![(10 + tag).into(), (10 + index).into()]),
        Operation::new("l", vec![(200 + tag).into(), (200 + index).into()]),
        Operation::new("S", vec![]),
    ]
}

/// Expected content-stream bytes of fixture page `index`, for order checks.
pub(crate) fn sample_page_content(index: i64, tag: i64) -> Vec<u8> {
    Content {
        operations: page_operations(index, tag),
    }
    .encode()
    .expect("encode fixture content")
}

/// Build a minimal `page_count`-page lopdf document.
pub(crate) fn sample_pdf_document(page_count: usize, tag: i64) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::with_capacity(page_count);
    for index in 0..page_count as i64 {
        let content = Content {
            operations: page_operations(index, tag),
        };
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            content.encode().expect("encode fixture content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Same fixture wrapped as an assembly input.
pub(crate) fn sample_pdf(page_count: usize, tag: i64) -> PdfSource {
    PdfSource::from_document(sample_pdf_document(page_count, tag))
}

/// Same fixture serialised to bytes.
pub(crate) fn sample_pdf_bytes(page_count: usize, tag: i64) -> Vec<u8> {
    let mut doc = sample_pdf_document(page_count, tag);
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("serialise fixture");
    bytes
}

/// Solid-colour RGB image fixture.
pub(crate) fn sample_image(width: u32, height: u32) -> ImageSource {
    ImageSource::from_dynamic(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        width,
        height,
        Rgb([90, 120, 180]),
    )))
}
