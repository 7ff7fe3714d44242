// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n"));
        content.push_str("> A *quoted* remark with `code` and a [link](https://example.com).\n");
        content.push_str("Paragraph with **bold**, _italic_ and ~~struck~~ words.\n");
        for i in 1..=3 {
            content.push_str(&format!("- bullet {i} with **emphasis**\n"));
        }
        for i in 1..=3 {
            content.push_str(&format!("{i}. ordered {i}\n"));
        }
        content.push_str("---\n");
        if section % 3 == 0 {
            content.push_str("```\nfn example() {\n    let value = 42;\n}\n```\n");
        }
    }

    content
}

/// `depth` levels of alternating bold and italic around one word.
#[allow(dead_code)]
pub fn generate_nested_emphasis(depth: usize) -> String {
    let mut content = String::from("word");
    for level in 0..depth {
        content = if level % 2 == 0 {
            format!("*a {content} b*")
        } else {
            format!("**a {content} b**")
        };
    }
    content
}
