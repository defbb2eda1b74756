//! Performance benchmarks for seo-score.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small page (~1KB) for microbenchmarks
//! - Generated pages of increasing size to see how extraction scales

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seo_score::{analyze, analyze_with_options, scoring, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article About Rust Performance and Page Speed</title>
    <meta name="description" content="A sample article for benchmarking.">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="canonical" href="https://example.com/sample">
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
        <a href="https://other.example.org/" rel="nofollow">Partner</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <img src="/hero.jpg" alt="Hero image">
        <img src="/chart.png">
        <h2>First section</h2>
        <p>This is the first paragraph of the article. It contains some meaningful
        content about rust performance that the keyword analysis will count.</p>
        <h2>Second section</h2>
        <p>Here is a second paragraph with more content. Rust performance matters
        for page speed and page speed matters for search.</p>
    </article>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn generated_page(paragraphs: usize) -> String {
    let mut html = String::from(
        "<html><head><title>Generated page</title></head><body><h1>Generated</h1>",
    );
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<h2>Section {i}</h2><p>Paragraph {i} talks about search engine optimization, \
             keyword density and <a href=\"/page/{i}\">internal links</a>.</p>\
             <img src=\"/img/{i}.png\" alt=\"figure {i}\">"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_analyze_default(c: &mut Criterion) {
    c.bench_function("analyze_default", |b| {
        b.iter(|| analyze(black_box(SAMPLE_HTML)));
    });
}

fn bench_analyze_with_options(c: &mut Criterion) {
    let options = Options {
        url: Some("https://example.com/sample".to_string()),
        focus_keyword: Some("rust performance".to_string()),
        top_keywords: 20,
        ..Options::default()
    };

    c.bench_function("analyze_with_options", |b| {
        b.iter(|| analyze_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_scoring_only(c: &mut Criterion) {
    let options = Options::default();
    let data = seo_score::extract_seo_data(SAMPLE_HTML, &options);

    c.bench_function("score_only", |b| {
        b.iter(|| scoring::calculate_seo_score(black_box(&data), black_box(&options)));
    });
}

fn bench_generated_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("generated");

    for paragraphs in [10, 100, 1000] {
        let html = generated_page(paragraphs);
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze", format!("{paragraphs} sections ({size_kb}KB)")),
            &html,
            |b, html| {
                b.iter(|| analyze(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_analyze_default,
    bench_analyze_with_options,
    bench_scoring_only,
    bench_generated_pages
);
criterion_main!(benches);
