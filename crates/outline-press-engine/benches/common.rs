// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

pub const MARK: &str = "((6571a1b2-0000-4000-8000-000000000001))";

/// A journal-style outline with `articles` marker blocks separated by unrelated entries.
#[allow(dead_code)]
pub fn generate_outline(articles: usize, depth: usize) -> String {
    let mut content = String::new();

    for n in 0..articles {
        content.push_str(&format!("- Morning notes {n}\n\t- coffee\n\t- [[Reading List]]\n"));
        content.push_str(&format!("- {MARK} ## Article {n}\n"));
        content.push_str("\tid:: 6571a1b2-0000-4000-8000-00000000beef\n");
        content.push_str("\t- frontmatter\n\t\t- slug: article\n\t\t- tags: rust, bench\n");
        content.push_str(&generate_nested(depth, 1));
        content.push_str("\t- ```Rust\n\t  fn example() {\n\t      println!(\"hi\");\n\t  }\n\t  ```\n");
    }
    content.push_str("- 🏁\n");

    content
}

#[allow(dead_code)]
fn generate_nested(remaining_depth: usize, level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let indent = "\t".repeat(level);
    let mut content = String::new();
    for i in 0..3 {
        content.push_str(&format!(
            "{indent}- Point {i} at level {level} linking [[Some Page|alias]]\n"
        ));
    }
    content.push_str(&format!("{indent}  continuation with `((inline code))`\n"));
    content.push_str(&generate_nested(remaining_depth - 1, level + 1));

    content
}
