//! Criterion benchmarks for the splitter and document round-trip

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use csvdoc::codec::split_line;
use csvdoc::{CsvConfig, CsvFile};

fn synthetic_document(rows: usize) -> String {
    (0..rows)
        .map(|i| {
            format!(
                "\"{}\",\"station {}\",\"51.4778\",\"-0.4614\",\"notes, with commas\"\n",
                i, i
            )
        })
        .collect()
}

fn bench_split_line(c: &mut Criterion) {
    c.bench_function("split_plain_line", |b| {
        b.iter(|| split_line(black_box("a,b,c,d,e,f,g,h"), ','))
    });

    c.bench_function("split_quoted_line", |b| {
        b.iter(|| split_line(black_box("\"a,b\",\"c\",\"d,e,f\",\"g\""), ','))
    });
}

fn bench_document_roundtrip(c: &mut Criterion) {
    let config = CsvConfig::default();
    let document = synthetic_document(1_000);

    c.bench_function("parse_1k_row_document", |b| {
        b.iter(|| CsvFile::from_document(black_box(&document), &config))
    });

    let file = CsvFile::from_document(&document, &config);
    c.bench_function("render_1k_row_document", |b| {
        b.iter(|| file.to_document(&config))
    });
}

criterion_group!(benches, bench_split_line, bench_document_roundtrip);
criterion_main!(benches);
