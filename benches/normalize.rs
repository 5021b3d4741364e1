//! Benchmarks for the normalizer and the serializer.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use slate_html::{deserialize, normalize, serialize};

/// A pasted article: indentation, links around images, mixed list items and
/// marked-up paragraphs, repeated to a few hundred blocks.
fn sample_html() -> String {
    let section = r#"
<div>
  <h4>Section title<img src="https://example.com/header.png"></h4>
  <p>Some <b>bold</b> and <i>italic</i> text with a <a href="https://example.com" target="_blank">link</a>.<br></p>
  <p></p>
  <p></p>
  <a href="https://example.com/gallery">Gallery<img src="https://example.com/1.png" alt="one">more</a>
  <ul>
    <li>First item</li>
    <li>Second item<blockquote>quoted inside an item</blockquote></li>
  </ul>
  <p>Before <b><img src="https://example.com/2.png"></b> after</p>
  <pre>
fn main() {
    println!("hello");
}
</pre>
  <iframe src="//www.youtube.com/embed/dQw4w9WgXcQ"></iframe>
</div>
"#;
    section.repeat(50)
}

fn bench_normalize(c: &mut Criterion) {
    let html = sample_html();
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(&html));
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let html = normalize(&sample_html());
    c.bench_function("deserialize", |b| {
        b.iter(|| deserialize(&html));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let doc = deserialize(&normalize(&sample_html()));
    c.bench_function("serialize", |b| {
        b.iter(|| serialize(&doc));
    });
}

criterion_group!(benches, bench_normalize, bench_deserialize, bench_serialize);
criterion_main!(benches);
