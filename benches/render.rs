//! Benchmarks for markdown to HTML rendering.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markpad::render::to_html;

fn sample_markdown(sections: usize) -> String {
    let mut md = String::from("# Benchmark Document\n\n");
    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str("Some *emphasized* text with a [link](https://example.com) ");
        md.push_str("and `inline code`, plus ~~strikethrough~~.\n\n");
        md.push_str("- first item\n- second item\n- [ ] a task\n\n");
        md.push_str("| a | b |\n|---|---|\n| 1 | 2 |\n\n");
        md.push_str("```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n\n");
    }
    md
}

fn bench_to_html(c: &mut Criterion) {
    let small = sample_markdown(5);
    let large = sample_markdown(200);

    c.bench_function("to_html_small", |b| b.iter(|| to_html(black_box(&small))));
    c.bench_function("to_html_large", |b| b.iter(|| to_html(black_box(&large))));
}

criterion_group!(benches, bench_to_html);
criterion_main!(benches);
