//! Benchmarks for the manuscript compilation pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use folio::export::{build_package, build_printable};
use folio::{BookModel, Format, export, segment};

/// A synthetic manuscript with `chapters` chapters of a few paragraphs each.
fn manuscript(chapters: usize) -> String {
    let mut text = String::from("A Title Page\nby An Author\n\n");
    for i in 1..=chapters {
        text.push_str(&format!("Chapter {i}\n"));
        for _ in 0..20 {
            text.push_str(
                "The quick brown fox jumps over the lazy dog, and then it rests a while.\n",
            );
        }
        text.push('\n');
    }
    text
}

fn bench_segment(c: &mut Criterion) {
    let text = manuscript(200);
    c.bench_function("segment_200_chapters", |b| {
        b.iter(|| segment(black_box(&text)));
    });
}

fn bench_generators(c: &mut Criterion) {
    let book = BookModel::from_chapters(segment(&manuscript(200)))
        .with_title("Bench")
        .with_author("Criterion");

    c.bench_function("build_package", |b| {
        b.iter(|| build_package(black_box(&book)));
    });
    c.bench_function("build_printable", |b| {
        b.iter(|| build_printable(black_box(&book)));
    });
    c.bench_function("export_pdf", |b| {
        b.iter(|| export(black_box(&book), Format::Pdf).unwrap());
    });
}

criterion_group!(benches, bench_segment, bench_generators);
criterion_main!(benches);
