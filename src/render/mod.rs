//! Markdown to HTML conversion with comrak.
//!
//! [`to_html`] is the only entry point: a pure function from markdown
//! source to a complete, self-contained HTML document. It is called on
//! every keystroke, so it must stay cheap and side-effect free.

use comrak::Options;

/// Stylesheet embedded in every rendered document so the output renders
/// correctly in isolation, with no external assets.
const DOCUMENT_STYLE: &str = "\
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    line-height: 1.6;
    padding: 20px;
    max-width: 900px;
    margin: 0 auto;
    color: #333;
}
code {
    background-color: #f4f4f4;
    padding: 2px 6px;
    border-radius: 3px;
    font-family: 'Courier New', monospace;
}
pre {
    background-color: #f4f4f4;
    padding: 12px;
    border-radius: 5px;
    overflow-x: auto;
}
pre code {
    background-color: transparent;
    padding: 0;
}
blockquote {
    border-left: 4px solid #ddd;
    padding-left: 16px;
    margin-left: 0;
    color: #666;
}
table {
    border-collapse: collapse;
    width: 100%;
    margin: 16px 0;
}
th, td {
    border: 1px solid #ddd;
    padding: 8px;
    text-align: left;
}
th {
    background-color: #f4f4f4;
}
img {
    max-width: 100%;
    height: auto;
}
h1, h2, h3, h4, h5, h6 {
    margin-top: 24px;
    margin-bottom: 16px;
}";

/// Convert markdown source into a standalone styled HTML document.
///
/// Empty input yields an empty string, not an empty HTML shell. Malformed
/// markdown renders best-effort; this function never fails.
///
/// # Example
///
/// ```
/// let html = markpad::render::to_html("# Hello");
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("<h1"));
/// assert_eq!(markpad::render::to_html(""), "");
/// ```
pub fn to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }
    let fragment = comrak::markdown_to_html(markdown, &create_options());
    wrap_document(&fragment)
}

fn create_options() -> Options {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.superscript = true;
    options.extension.subscript = true;

    // Enable other useful extensions
    options.extension.header_ids = Some(String::new());
    options.extension.description_lists = true;

    options
}

/// Wrap a rendered fragment in a full HTML document with inline styling.
fn wrap_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset='utf-8'>\n\
         <style>\n{DOCUMENT_STYLE}\n</style>\n\
         </head>\n\
         <body>\n\
         {fragment}\
         </body>\n\
         </html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_output_is_a_complete_document() {
        let html = to_html("# Title\n\nBody text.");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<head>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
        assert_eq!(html.matches("</html>").count(), 1);
    }

    #[test]
    fn test_heading_converts_to_h1() {
        let html = to_html("# Hello");
        assert!(html.contains("<h1"), "expected an h1 tag: {html}");
        assert!(html.contains("Hello"));
    }

    #[test]
    fn test_styling_is_embedded() {
        let html = to_html("text");
        assert!(html.contains("<style>"));
        assert!(html.contains("font-family"));
        assert!(
            !html.contains("<link"),
            "document must not reference external stylesheets"
        );
    }

    #[test]
    fn test_table_extension_enabled() {
        let md = "| a | b |\n|---|---|\n| 1 | 2 |";
        let html = to_html(md);
        assert!(html.contains("<table>"), "tables must render: {html}");
    }

    #[test]
    fn test_strikethrough_extension_enabled() {
        let html = to_html("~~gone~~");
        assert!(html.contains("<del>"), "strikethrough must render: {html}");
    }

    #[test]
    fn test_tasklist_extension_enabled() {
        let html = to_html("- [x] done\n- [ ] todo");
        assert!(html.contains("checkbox"), "task lists must render: {html}");
    }

    #[test]
    fn test_fenced_code_block_renders() {
        let html = to_html("```\nlet x = 1;\n```");
        assert!(html.contains("<pre>") || html.contains("<pre "));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn test_malformed_markdown_degrades_gracefully() {
        // Unclosed emphasis, stray brackets, broken fences: comrak
        // renders all of it as best-effort HTML.
        let html = to_html("**bold [link(oops ```\n~~~");
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_same_input_same_output() {
        let md = "# A\n\n- one\n- two\n";
        assert_eq!(to_html(md), to_html(md));
    }

    proptest! {
        #[test]
        fn prop_nonempty_input_yields_wrapped_document(s in ".{1,400}") {
            let html = to_html(&s);
            prop_assert!(html.starts_with("<!DOCTYPE html>"));
            prop_assert_eq!(html.matches("<head>").count(), 1);
            prop_assert_eq!(html.matches("<body>").count(), 1);
        }

        #[test]
        fn prop_render_never_panics(s in "\\PC*") {
            let _ = to_html(&s);
        }
    }
}
