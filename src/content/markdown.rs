//! Markdown rendering for document bodies

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer for MDX bodies
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is handled separately in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Self { options }
    }

    /// Render a document body to HTML
    pub fn render(&self, body: &str) -> String {
        let markdown = strip_module_statements(body);
        let parser = Parser::new_ext(&markdown, self.options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop top-level MDX `import` / `export` lines, which have no HTML form.
/// Lines inside fenced code blocks are kept.
fn strip_module_statements(body: &str) -> String {
    let mut in_fence = false;
    let mut out = String::with_capacity(body.len());

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }
        if !in_fence && (line.starts_with("import ") || line.starts_with("export ")) {
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block_language() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"class="language-rust""#));
    }

    #[test]
    fn test_mdx_imports_stripped() {
        let renderer = MarkdownRenderer::new();
        let body = "import { Callout } from '@/components/callout'\n\nHello\n\n```js\nimport x from 'y'\n```\n";
        let html = renderer.render(body);
        assert!(!html.contains("@/components/callout"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(html.contains("import x from"));
    }
}
