//! Core text extraction: namespace marker, block segmentation, normalization.
//!
//! A file declares its namespace with a single marker line:
//!
//! ```text
//! // docable-member-namespace: Acme.Http.Response
//! ```
//!
//! Documentation blocks open at a `/**` line and run, shortest-match, to the
//! first terminator: a blank line, ` {}` + newline, ` {` + newline at end of
//! input, ` = {`, or a newline at end of input. The terminator is never part
//! of the block, so a block carries the doc comment plus the start of the
//! declaration signature that follows it, without the declaration body.

use regex::Regex;
use std::sync::LazyLock;

/// Marker line declaring the file's namespace. Anchored at line start; an
/// indented or otherwise prefixed marker does not count.
static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^// docable-member-namespace: (.+)").unwrap());

static RE_WS_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\*").unwrap());
static RE_WS_PROTECTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+protected").unwrap());
static RE_WS_PRIVATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+private").unwrap());
static RE_WS_PUBLIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+public").unwrap());
static RE_WS_CONSTRUCTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+constructor").unwrap());

/// Opening sequence of a documentation block.
const OPENER: &str = "/**\n";

/// Find the namespace declared by a marker line anywhere in the input.
/// The first matching line wins; duplicates are ignored.
pub fn namespace(input: &str) -> Option<&str> {
    RE_NAMESPACE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Segment the input into raw documentation blocks, in source order.
///
/// Matching is non-overlapping: after a block is taken, the search for the
/// next opener resumes at the terminator position, so an opener swallowed
/// by a previous block does not start a block of its own.
pub fn doc_blocks(input: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut pos = 0;

    while let Some(found) = input[pos..].find(OPENER) {
        let start = pos + found;
        let Some(end) = first_terminator(input.as_bytes(), start + OPENER.len()) else {
            // Terminators are positional, so no later opener can have one either.
            break;
        };
        blocks.push(&input[start..end]);
        pos = end;
    }

    blocks
}

/// Earliest position at or after `from` where a terminator begins.
fn first_terminator(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len()).find(|&p| terminator_at(bytes, p))
}

/// True if one of the five terminators begins at `p`, checked in the order
/// listed in the module doc. The order has no effect on the extracted block,
/// since a terminator contributes nothing to it.
fn terminator_at(bytes: &[u8], p: usize) -> bool {
    let rest = &bytes[p..];
    rest.starts_with(b"\n\n")
        || rest.starts_with(b" {}\n")
        || rest == b" {\n"
        || rest.starts_with(b" = {")
        || rest == b"\n"
}

/// Normalize whitespace in an extracted block.
///
/// Runs of whitespace before a `*` collapse to a single space (applied twice;
/// idempotent after the first pass). Whitespace before the member keywords
/// `protected`, `private`, `public` and `constructor` is removed entirely,
/// joining the keyword to what precedes it.
pub fn normalize(block: &str) -> String {
    let pass = RE_WS_STAR.replace_all(block, " *");
    let pass = RE_WS_STAR.replace_all(&pass, " *");
    let pass = RE_WS_PROTECTED.replace_all(&pass, "protected");
    let pass = RE_WS_PRIVATE.replace_all(&pass, "private");
    let pass = RE_WS_PUBLIC.replace_all(&pass, "public");
    RE_WS_CONSTRUCTOR.replace_all(&pass, "constructor").into_owned()
}
