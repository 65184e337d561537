// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for document assembly in the bindery-document crate.
// Covers the two hot paths: rendering image pages and merging existing PDFs,
// both including serialisation and the validation re-parse.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use bindery_document::{DocumentAssembler, ImageSource, MergeableItem, PdfSource};

fn image_item(width: u32, height: u32) -> MergeableItem {
    MergeableItem::Image(ImageSource::from_dynamic(DynamicImage::ImageRgb8(
        RgbImage::from_pixel(width, height, Rgb([120, 140, 90])),
    )))
}

/// Benchmark assembling three modest images into a three-page document.
fn bench_assemble_images(c: &mut Criterion) {
    let assembler = DocumentAssembler::default();

    c.bench_function("assemble 3 images (400x300)", |b| {
        b.iter(|| {
            let items = vec![
                image_item(400, 300),
                image_item(300, 400),
                image_item(640, 480),
            ];
            let assembled = assembler.assemble(black_box(&items)).expect("assemble");
            black_box(assembled.to_bytes().expect("serialise"));
        });
    });
}

/// Benchmark merging an image page with a five-page PDF. The source PDF is
/// built once up front; re-parsing it per iteration is part of the measured
/// path, which matches how the CLI consumes file inputs.
fn bench_assemble_mixed(c: &mut Criterion) {
    let assembler = DocumentAssembler::default();

    // Five single-image pages, serialised once to act as the existing PDF.
    let seed_items: Vec<MergeableItem> = (0..5).map(|_| image_item(200, 150)).collect();
    let pdf_bytes = assembler
        .assemble(&seed_items)
        .expect("seed assemble")
        .to_bytes()
        .expect("seed serialise");

    c.bench_function("assemble image + 5-page PDF", |b| {
        b.iter(|| {
            let items = vec![
                image_item(400, 300),
                MergeableItem::Document(
                    PdfSource::from_bytes(black_box(&pdf_bytes)).expect("load seed"),
                ),
            ];
            let assembled = assembler.assemble(&items).expect("assemble");
            black_box(assembled.to_bytes().expect("serialise"));
        });
    });
}

criterion_group!(benches, bench_assemble_images, bench_assemble_mixed);
criterion_main!(benches);
