/// Split raw input into its ordered, non-empty, trimmed tokens.
///
/// Newlines and commas both act as separators and may be mixed within the
/// same input. Tokens that are empty after trimming are discarded. Order of
/// first appearance is preserved and duplicates are kept.
pub fn extract_lines(text: &str) -> Vec<&str> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
