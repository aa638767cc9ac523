use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use studyplatform::domain::{selection::parse_selection, text::truncate_to_width};

const QUOTED: &str = r#"'/home/me/Study Notes/Chapter 1.pdf' /home/me/lecture\ 02.docx "/tmp/reading list.txt""#;
const URIS: &str = "file:///home/me/Study%20Notes/Chapter%201.pdf\nfile:///home/me/lecture%2002.docx\nfile://localhost/tmp/reading%20list.txt";

fn many_paths(n: usize) -> String {
    (0..n)
        .map(|i| format!("/home/me/course/week-{i}/slides\\ {i}.pdf"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("parse-quoted", |b| {
        b.iter(|| parse_selection(black_box(QUOTED)))
    });

    c.bench_function("parse-uris", |b| b.iter(|| parse_selection(black_box(URIS))));

    let bulk = many_paths(200);
    c.bench_function("parse-200-paths", |b| {
        b.iter(|| parse_selection(black_box(&bulk)))
    });

    c.bench_function("truncate-file-name", |b| {
        b.iter(|| truncate_to_width(black_box("講義ノート_第三章_確率と統計_最終版.pdf"), black_box(24)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
