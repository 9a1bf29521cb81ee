use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// The fence marker prefix. A marker line is optional leading spaces followed
/// by three or more backticks, optionally followed by a language tag.
pub const FENCE: &str = "```";

/// Single-line ```…``` quoting. Rewritten to `…` before boundary detection
/// so it can never be mistaken for a fence marker.
static INLINE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(.+?)```").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Prose,
    Code,
}

/// A contiguous, typed region of the source document. `text` excludes the
/// delimiting marker lines when `kind` is [`SpanKind::Code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    pub fn prose(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Prose,
            text: text.into(),
        }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Code,
            text: text.into(),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated code fence at byte offset {offset}")]
    UnterminatedFence { offset: usize },
}

/// Result of a tokenization pass. `unterminated`, when set, is the byte
/// offset (into the original document) of the line start of an opening fence
/// marker that never closed; the spans still cover the full document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub spans: Vec<Span>,
    pub unterminated: Option<usize>,
}

/// Partitions `document` into alternating prose and code spans.
///
/// Markers pair by parity: odd-numbered markers open a code region and
/// even-numbered ones close it. An odd total leaves the tail as an
/// unterminated code span, advisory by default and fatal under `strict`.
/// An empty document yields a single empty prose span.
pub fn tokenize(document: &str, strict: bool) -> Result<Tokenized, TokenizeError> {
    let mut spans = Vec::new();
    let mut buffer = String::new();
    let mut in_code = false;
    let mut open_offset = 0;
    // A closing marker opens a prose region that must be emitted even when
    // empty: the count of boundary crossings is part of the contract.
    let mut pending_prose = false;

    for (offset, line) in lines_with_offsets(document) {
        let line = rewrite_inline_fences(line);
        if is_fence_marker(&line) {
            if in_code {
                spans.push(Span::code(trim_code_edges(&buffer)));
                buffer.clear();
                in_code = false;
                pending_prose = true;
            } else {
                if !buffer.is_empty() || pending_prose {
                    spans.push(Span::prose(trim_prose_edges(&buffer)));
                    buffer.clear();
                }
                pending_prose = false;
                in_code = true;
                open_offset = offset;
            }
        } else {
            buffer.push_str(&line);
        }
    }

    if in_code {
        if strict {
            return Err(TokenizeError::UnterminatedFence {
                offset: open_offset,
            });
        }
        spans.push(Span::code(trim_code_edges(&buffer)));
        return Ok(Tokenized {
            spans,
            unterminated: Some(open_offset),
        });
    }

    if !buffer.is_empty() || pending_prose || spans.is_empty() {
        spans.push(Span::prose(trim_prose_edges(&buffer)));
    }

    Ok(Tokenized {
        spans,
        unterminated: None,
    })
}

/// Yields each line (terminator included) with the byte offset of its start.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        (start, line)
    })
}

fn rewrite_inline_fences(line: &str) -> Cow<'_, str> {
    INLINE_FENCE.replace_all(line, "`$1`")
}

fn is_fence_marker(line: &str) -> bool {
    let line = line.trim_end_matches(['\r', '\n']);
    line.trim_start_matches(' ').starts_with(FENCE)
}

/// Prose edges: leading blank lines go, then the shared trailing rule.
fn trim_prose_edges(text: &str) -> String {
    trim_span_end(trim_span_start(text))
}

/// Code edges: marker lines are already gone, so only the trailing rule
/// applies. Interior blank lines are untouched.
fn trim_code_edges(text: &str) -> String {
    trim_span_end(text)
}

fn trim_span_start(text: &str) -> &str {
    let mut rest = text;
    loop {
        let unindented = rest.trim_start_matches(' ');
        let stripped = unindented
            .strip_prefix("\r\n")
            .or_else(|| unindented.strip_prefix('\n'));
        match stripped {
            Some(next) => rest = next,
            None => return rest,
        }
    }
}

/// Strips the final line terminator and every trailing blank line, so span
/// text never ends mid-air in a newline. Re-tokenizing serialized output
/// must reproduce the same spans, which rules out keeping any trailing run.
fn trim_span_end(text: &str) -> String {
    let mut out = text.to_string();
    while strip_trailing_newline_unit(&mut out) {}
    out
}

/// Removes one trailing `spaces* \r? \n` unit, if present.
fn strip_trailing_newline_unit(text: &mut String) -> bool {
    let bytes = text.as_bytes();
    let mut end = bytes.len();
    if end == 0 || bytes[end - 1] != b'\n' {
        return false;
    }
    end -= 1;
    if end > 0 && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    while end > 0 && bytes[end - 1] == b' ' {
        end -= 1;
    }
    text.truncate(end);
    true
}
