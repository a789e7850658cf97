// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Executive Summary\n\n## Criteria\n\nParagraph with **bold**, *italic* and `code` content.\n\n- Bullet point\n- Another item\n1. First\n2. Second\n\n> A quoted remark\n\n| Criterion | Weight |\n|:---|---:|\n| Clarity | 40 |\n| Depth | 60 |\n\n```rust fn example() {}```\n\n---\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "plain **bold** and *it* with `code` then __more__ _em_ ".repeat(repeats)
}
