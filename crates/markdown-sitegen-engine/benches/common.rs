// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`, plus [a link](https://example.com/page).\n\n- Bullet point\n- Another item with ![an image](/img/cat.png)\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!(
            "word {i} **bold {i}** and _italic {i}_ with `code {i}` see [link {i}](https://example.com/{i}) or <user{i}@example.com>. "
        ));
    }
    line
}

#[allow(dead_code)]
pub fn generate_site_pages(pages: usize) -> Vec<(String, String)> {
    (0..pages)
        .map(|i| {
            (
                format!("section{}/page{i}.md", i % 5),
                format!("# Page {i}\n\n{}", generate_markdown_content(3)),
            )
        })
        .collect()
}
