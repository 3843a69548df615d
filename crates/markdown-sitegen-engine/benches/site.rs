use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{MarkdownOptions, generate_pages_recursive};
mod common;

fn bench_generate_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("site");
    group.sample_size(10);

    let site_dir = tempfile::tempdir().unwrap();
    let content_dir = site_dir.path().join("content");
    for (relative, markdown) in common::generate_site_pages(50) {
        let path = content_dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, markdown).unwrap();
    }
    let template = site_dir.path().join("template.html");
    std::fs::write(
        &template,
        "<html><title>{{ Title }}</title><body>{{ Content }}</body></html>",
    )
    .unwrap();
    let public = site_dir.path().join("public");

    group.bench_function("generate_pages_recursive", |b| {
        b.iter(|| {
            generate_pages_recursive(&content_dir, &template, &public, &MarkdownOptions::default())
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_generate_pages);
criterion_main!(benches);
