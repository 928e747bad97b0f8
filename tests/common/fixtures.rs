/// A short document touching every block kind.
pub fn showcase_markdown() -> &'static str {
    r#"# Quarterly Report

An *introduction* with **bold** text, `inline code` and a [link](https://example.com).

## Highlights

- Revenue grew
- Costs fell
  1. Travel
  2. Hosting

| Region | Revenue |
|--------|---------|
| North  | 120     |
| South  | 95      |

---

```rust
fn main() {
    println!("hello");
}
```

See [the highlights](#highlights) again.
"#
}

/// `count` numbered paragraphs, enough to span several pages when large.
pub fn many_paragraphs(count: usize) -> String {
    (1..=count)
        .map(|i| format!("Paragraph {} has a few words of filler text in it.", i))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A Markdown table with `rows` data rows.
pub fn long_table(rows: usize) -> String {
    let mut table = String::from("| Id | Name |\n|----|------|\n");
    for i in 1..=rows {
        table.push_str(&format!("| {} | item-{} |\n", i, i));
    }
    table
}

/// A fenced code block with `lines` numbered lines.
pub fn long_code_block(lines: usize) -> String {
    let body: Vec<String> = (1..=lines).map(|i| format!("line_{:03}();", i)).collect();
    format!("```\n{}\n```\n", body.join("\n"))
}
