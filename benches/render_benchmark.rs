//! Performance benchmarks for answer rendering
//!
//! Measures one full-transcript render at several sizes, and the cumulative
//! cost of re-rendering after every chunk the way a session does.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ragchat::adapters::mock::RecordingPresenter;
use ragchat::markdown::{render_markdown, MarkdownRenderer};
use ragchat::StreamSession;

/// Generate markdown in the supported subset with varying length
fn generate_markdown_content(sections: usize) -> String {
    let section = "\
This is a **test paragraph** with __bold__ text & some <angle> brackets.

- List item 1
- List item 2
    - Nested item with **bold**
        - Deeper item
- List item 3
---
";

    (0..sections)
        .map(|i| format!("### Section {}\n{}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split `text` into chunks of roughly `size` bytes on char boundaries
fn chunk_text(text: &str, size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        current.push(ch);
        if current.len() >= size {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Benchmark a single render of the full transcript
fn bench_markdown_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown_render");

    for size in [1, 5, 10, 25, 50].iter() {
        let content = generate_markdown_content(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_sections", size)),
            &content,
            |b, content| {
                b.iter(|| {
                    let html = render_markdown(black_box(content));
                    black_box(html)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark re-rendering the growing transcript after every chunk
fn bench_incremental_rerender(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_rerender");

    for size in [5, 25].iter() {
        let content = generate_markdown_content(*size);
        let chunks = chunk_text(&content, 16);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_sections", size)),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let mut renderer = MarkdownRenderer::new();
                    let mut transcript = String::new();
                    let mut last = String::new();
                    for chunk in chunks {
                        transcript.push_str(chunk);
                        last = renderer.render(&transcript);
                    }
                    black_box(last)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the whole session pipeline over an SSE body
fn bench_session_pipeline(c: &mut Criterion) {
    let content = generate_markdown_content(10);
    let mut body = String::new();
    for chunk in chunk_text(&content, 16) {
        body.push_str(&format!("data: {}\n\n", serde_json::json!(chunk)));
    }
    body.push_str("data: {\"type\":\"done\"}\n\n");
    let network_chunks: Vec<&[u8]> = body.as_bytes().chunks(1024).collect();

    c.bench_function("session_pipeline_10_sections", |b| {
        b.iter(|| {
            let mut session = StreamSession::new(RecordingPresenter::new());
            for chunk in &network_chunks {
                session.feed(black_box(chunk));
            }
            black_box(session.finish())
        });
    });
}

criterion_group!(
    benches,
    bench_markdown_render,
    bench_incremental_rerender,
    bench_session_pipeline
);

criterion_main!(benches);
