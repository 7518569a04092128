//! Loose well-formedness check for HTML fragments.
//!
//! The document is wrapped in a synthetic root element and parsed with the
//! tree-sitter HTML grammar. Only syntax-error regions that contain tag
//! syntax fail the check; unclosed or stray tags that the grammar recovers
//! from are accepted, and so is plain text the grammar is stricter about
//! than browsers are (`x > 5`, `a && b`, `fn f() -> u8`).

use std::sync::LazyLock;

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};
use regex::Regex;

const WRAPPER_OPEN: &str = "<root>";
const WRAPPER_CLOSE: &str = "</root>";

/// A character reference at the start of the haystack: `&amp;`, `&#60;`, `&#x3C;`.
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);")
        .expect("valid entity regex")
});

/// Location of the first unparseable region.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at line {line} near `{snippet}`")]
pub struct MarkupError {
    /// 1-based line in the checked document.
    pub line: usize,
    pub snippet: String,
}

/// Check that `source` can be read as a markup fragment.
///
/// # Errors
///
/// Returns [`MarkupError`] pointing at the first syntax error.
pub fn check_fragment(source: &str) -> Result<(), MarkupError> {
    let wrapped = format!("{WRAPPER_OPEN}{}{WRAPPER_CLOSE}", neutralize_text(source));
    let tree = SupportLang::Html.ast_grep(&wrapped);
    match first_error(&tree.root()) {
        Some(range) => Err(locate(source, range)),
        None => Ok(()),
    }
}

/// Blank out `<`, `>` and `&` in text content where the grammar rejects them.
///
/// Each replaced character is one ASCII byte swapped for a space, so byte
/// offsets and line numbers still match `source`. A `<` survives only when it
/// opens a tag. Tags, comments and character references are copied unchanged.
fn neutralize_text(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(c) = rest.chars().next() {
        let copied = if rest.starts_with("<!--") {
            rest.find("-->").map_or(rest.len(), |end| end + 3)
        } else if c == '<' && starts_tag(&rest[1..]) {
            tag_len(rest)
        } else if c == '&' {
            ENTITY_RE.find(rest).map_or(0, |m| m.end())
        } else if matches!(c, '<' | '>') {
            0
        } else {
            c.len_utf8()
        };

        if copied == 0 {
            out.push(' ');
            rest = &rest[1..];
        } else {
            out.push_str(&rest[..copied]);
            rest = &rest[copied..];
        }
    }

    out
}

fn starts_tag(after_lt: &str) -> bool {
    after_lt
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Byte length of the tag starting at `rest`, up to and including the
/// closing `>` outside quotes, or the rest of the input if unterminated.
fn tag_len(rest: &str) -> usize {
    let mut quote = None;
    for (index, c) in rest.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, '>') => return index + 1,
            _ => {}
        }
    }
    rest.len()
}

/// Byte range (in the wrapped document) of the first error region that
/// contains tag syntax.
fn first_error<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<std::ops::Range<usize>> {
    if node.kind().as_ref() == "ERROR" {
        return node.text().contains('<').then(|| node.range());
    }

    let children: Vec<_> = node.children().collect();
    children.iter().find_map(|child| first_error(child))
}

/// Map a wrapped-document range back onto `source`.
fn locate(source: &str, range: std::ops::Range<usize>) -> MarkupError {
    let start = range.start.saturating_sub(WRAPPER_OPEN.len()).min(source.len());
    let end = range
        .end
        .saturating_sub(WRAPPER_OPEN.len())
        .clamp(start, source.len());
    let line = source.get(..start).map_or(0, |before| before.matches('\n').count()) + 1;
    let text = source.get(start..end).unwrap_or_default();
    MarkupError {
        line,
        snippet: snippet(text),
    }
}

fn snippet(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    let mut snippet: String = first_line.chars().take(40).collect();
    if first_line.chars().count() > 40 {
        snippet.push_str("...");
    }
    snippet
}
