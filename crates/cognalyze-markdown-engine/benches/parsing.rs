use cognalyze_markdown_engine::{
    FormatVersion, Variant, format_inline, parse_document, render_html,
};
use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::Parser;
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    for version in [FormatVersion::V1, FormatVersion::V2] {
        group.bench_function(format!("parse_document_{version}"), |b| {
            b.iter(|| {
                let doc = parse_document(std::hint::black_box(&content), version);
                std::hint::black_box(doc);
            });
        });
    }

    group.bench_function("render_html", |b| {
        b.iter(|| {
            let html = render_html(
                std::hint::black_box(&content),
                Variant::Default,
                FormatVersion::V1,
            );
            std::hint::black_box(html);
        });
    });

    group.finish();
}

fn bench_format_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let line = common::generate_inline_heavy_line(200);
    group.bench_function("format_inline", |b| {
        b.iter(|| {
            let spans = format_inline(std::hint::black_box(&line));
            std::hint::black_box(spans);
        });
    });

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_document,
    bench_format_inline,
    bench_pulldown_cmark_baseline
);
criterion_main!(benches);
