use url::Url;

use super::selector::ArrayFormat;
use super::split::extract_lines;

/// Output for a selector name that is not recognized.
const EMPTY_ARRAY: &str = "[]";

/// Render the input rows in the requested format.
///
/// Pure: the output depends only on `text` and `format`, so identical calls
/// yield byte-identical results.
pub fn convert(text: &str, format: ArrayFormat) -> String {
    let lines = extract_lines(text);

    match format {
        ArrayFormat::Simple => render_simple(&lines),
        ArrayFormat::Quoted => render_wrapped(&lines, '\''),
        ArrayFormat::Template => render_wrapped(&lines, '`'),
        ArrayFormat::Markdown => render_markdown(&lines),
    }
}

/// Render for a selector given by name. Unrecognized names fall back to the
/// literal `[]` rather than an error.
pub fn convert_named(text: &str, name: &str) -> String {
    match name.parse::<ArrayFormat>() {
        Ok(format) => convert(text, format),
        Err(_) => EMPTY_ARRAY.to_string(),
    }
}

fn render_simple(lines: &[&str]) -> String {
    format!("[{}]", lines.join(", "))
}

/// Multi-line array with every entry wrapped in `delim`, two-space indented,
/// the brackets on their own lines. A literal `delim` inside an entry is
/// escaped with a backslash.
fn render_wrapped(lines: &[&str], delim: char) -> String {
    let mut out = String::from("[\n  ");

    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            out.push_str(",\n  ");
        }
        out.push(delim);
        for c in line.chars() {
            if c == delim {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(delim);
    }

    out.push_str("\n]");
    out
}

fn render_markdown(lines: &[&str]) -> String {
    let items: Vec<String> = lines.iter().map(|line| markdown_item(line)).collect();
    items.join("\n")
}

/// A line that parses as an absolute URL becomes a link titled with its host;
/// anything else is emitted verbatim. Parse failure never propagates.
fn markdown_item(line: &str) -> String {
    match Url::parse(line) {
        Ok(url) => format!("- [{}]({})", url.host_str().unwrap_or(""), line),
        Err(_) => format!("- {}", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_single_line() {
        assert_eq!(convert("a\nb\nc", ArrayFormat::Simple), "[a, b, c]");
    }

    #[test]
    fn test_simple_entry_count_matches_tokens() {
        let text = "a, b\nc,\n d ";
        let output = convert(text, ArrayFormat::Simple);
        let inner = &output[1..output.len() - 1];
        assert_eq!(inner.split(", ").count(), extract_lines(text).len());
    }

    #[test]
    fn test_simple_mixed_separators() {
        assert_eq!(convert("a,b\nc", ArrayFormat::Simple), "[a, b, c]");
    }

    #[test]
    fn test_simple_order_preserved() {
        assert_eq!(convert("b\na\nc", ArrayFormat::Simple), "[b, a, c]");
    }

    #[test]
    fn test_quoted_layout() {
        assert_eq!(
            convert("a\nb", ArrayFormat::Quoted),
            "[\n  'a',\n  'b'\n]"
        );
    }

    #[test]
    fn test_quoted_escapes_single_quote() {
        assert_eq!(convert("it's", ArrayFormat::Quoted), "[\n  'it\\'s'\n]");
    }

    #[test]
    fn test_template_layout() {
        assert_eq!(
            convert("a\nb", ArrayFormat::Template),
            "[\n  `a`,\n  `b`\n]"
        );
    }

    #[test]
    fn test_template_escapes_backtick() {
        assert_eq!(convert("a`b", ArrayFormat::Template), "[\n  `a\\`b`\n]");
    }

    #[test]
    fn test_markdown_url_line() {
        assert_eq!(
            convert("https://example.com/page", ArrayFormat::Markdown),
            "- [example.com](https://example.com/page)"
        );
    }

    #[test]
    fn test_markdown_non_url_line() {
        assert_eq!(convert("not a url", ArrayFormat::Markdown), "- not a url");
    }

    #[test]
    fn test_markdown_mixed_lines() {
        assert_eq!(
            convert("https://docs.rs/url\nplain note", ArrayFormat::Markdown),
            "- [docs.rs](https://docs.rs/url)\n- plain note"
        );
    }

    #[test]
    fn test_markdown_host_excludes_port_and_path() {
        assert_eq!(
            convert("http://localhost:8080/api", ArrayFormat::Markdown),
            "- [localhost](http://localhost:8080/api)"
        );
    }

    #[test]
    fn test_markdown_hostless_url() {
        // A URL without a host component still links, with an empty title.
        assert_eq!(
            convert("mailto:someone@example.com", ArrayFormat::Markdown),
            "- [](mailto:someone@example.com)"
        );
    }

    #[test]
    fn test_markdown_no_trailing_newline() {
        let output = convert("a\nb", ArrayFormat::Markdown);
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_empty_input_per_format() {
        assert_eq!(convert("", ArrayFormat::Simple), "[]");
        assert_eq!(convert("", ArrayFormat::Quoted), "[\n  \n]");
        assert_eq!(convert("", ArrayFormat::Template), "[\n  \n]");
        assert_eq!(convert("", ArrayFormat::Markdown), "");
    }

    #[test]
    fn test_whitespace_only_equals_empty() {
        for format in ArrayFormat::ALL {
            assert_eq!(convert("   \n  \n", format), convert("", format));
        }
    }

    #[test]
    fn test_idempotent() {
        let text = "https://example.com\nit's, a`b";
        for format in ArrayFormat::ALL {
            assert_eq!(convert(text, format), convert(text, format));
        }
    }

    #[test]
    fn test_convert_named_known() {
        assert_eq!(convert_named("a,b", "simple"), "[a, b]");
        assert_eq!(
            convert_named("a", "quoted"),
            convert("a", ArrayFormat::Quoted)
        );
    }

    #[test]
    fn test_convert_named_unknown_falls_back() {
        assert_eq!(convert_named("a\nb", "yaml"), "[]");
        assert_eq!(convert_named("anything", ""), "[]");
    }
}
