//! Heuristic extraction of structure from free-text model replies.
//!
//! Parsing never fails. A reply that already cost tens of seconds of local
//! inference is never discarded over a formatting quirk: when no title can
//! be read, a generic label stands in and the reply still goes through as
//! the body, byte for byte.

/// Fallback label when no heading can be read from a reply.
pub const FALLBACK_TITLE: &str = "Untitled Recipe";

/// Lines longer than this read as prose, not headings.
const MAX_TITLE_LEN: usize = 80;

/// Structured view of a recipe reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecipe {
    pub title: String,
    /// True when the title came from the reply, false when it is
    /// [`FALLBACK_TITLE`].
    pub title_inferred: bool,
    /// The full raw reply, unmodified.
    pub body: String,
}

/// Extract a display title and pass the reply through as the body.
pub fn parse_recipe(raw: &str) -> ParsedRecipe {
    match infer_title(raw) {
        Some(title) => ParsedRecipe {
            title,
            title_inferred: true,
            body: raw.to_string(),
        },
        None => ParsedRecipe {
            title: FALLBACK_TITLE.to_string(),
            title_inferred: false,
            body: raw.to_string(),
        },
    }
}

/// A substitution reply is the whole text; only surrounding whitespace is
/// trimmed.
pub fn parse_substitution(raw: &str) -> String {
    raw.trim().to_string()
}

/// Read a title from the first non-empty line, if it looks like a heading.
fn infer_title(raw: &str) -> Option<String> {
    let first = raw.lines().map(str::trim).find(|line| !line.is_empty())?;
    let candidate = strip_decoration(first);
    if looks_like_heading(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}

/// Strip markdown heading/bold markers and a "Recipe Title:" style label.
fn strip_decoration(line: &str) -> &str {
    let line = line.trim_start_matches('#').trim();
    let line = line.trim_matches('*').trim();
    let line = ["Recipe Title:", "Title:"]
        .iter()
        .find_map(|label| line.strip_prefix(label))
        .map(str::trim)
        .unwrap_or(line);
    line.trim_matches('*').trim()
}

fn looks_like_heading(line: &str) -> bool {
    !line.is_empty()
        && line.chars().count() <= MAX_TITLE_LEN
        && !line.ends_with(['.', '!', '?', ':', ','])
}
