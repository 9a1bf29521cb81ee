//! # Document ⇄ Notebook Conversion Core
//!
//! Pure functions converting between fenced-block Markdown text and the
//! ordered cell model in [`crate::model`]. No I/O happens here; the command
//! layer feeds text in and writes results out through the storage layer.
//!
//! The hard direction is text → cells:
//!
//! 1. [`tokenizer::tokenize`] partitions the text into typed spans, resolving
//!    the inline-code/fence ambiguity and unterminated fences.
//! 2. [`cells::build`] maps each span to a cell, splitting into lines that
//!    keep their own terminators.
//!
//! The reverse direction, [`render::serialize`], re-emits fenced text from
//! cells and is the other half of the round-trip contract: serializing the
//! cells built from a document yields a *normalized* form of that document
//! (span edges trimmed per the tokenizer's whitespace rules), and converting
//! that normalized form again is a fixed point.

pub mod cells;
pub mod render;
pub mod tokenizer;

pub use cells::build;
pub use render::{collapse_blank_runs, serialize};
pub use tokenizer::{tokenize, Span, SpanKind, TokenizeError, Tokenized};

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(document: &str) -> String {
        let tokenized = tokenize(document, false).unwrap();
        serialize(&build(tokenized.spans))
    }

    #[test]
    fn test_concrete_case_produces_three_cells() {
        let document = "intro text\n\n```py\nx = 1\n```\n\noutro text\n";
        let tokenized = tokenize(document, false).unwrap();
        assert_eq!(
            tokenized.spans,
            vec![
                Span::prose("intro text"),
                Span::code("x = 1"),
                Span::prose("outro text"),
            ]
        );
        assert!(tokenized.unterminated.is_none());
    }

    #[test]
    fn test_roundtrip_is_idempotent_after_one_pass() {
        let documents = [
            "intro text\n\n```py\nx = 1\n```\n\noutro text\n",
            "```\ncode only\n```\n",
            "prose only, no fences\n",
            "```\na\n```\n```\nb\n```\n",
            "lead\n\n\n```\nx\n\n\n```\ntail",
        ];
        for document in documents {
            let once = roundtrip(document);
            let twice = roundtrip(&once);
            assert_eq!(twice, once, "not a fixed point for {document:?}");
        }
    }

    #[test]
    fn test_repeated_conversion_yields_same_cells() {
        let document = "intro\n\n```py\nx = 1\n```\n\noutro\n";
        let first = build(tokenize(document, false).unwrap().spans);
        let rendered = serialize(&first);
        let second = build(tokenize(&rendered, false).unwrap().spans);
        assert_eq!(second, first);
    }

    #[test]
    fn test_unterminated_fence_survives_roundtrip() {
        let document = "text\n```py\nx = 1\n";
        let tokenized = tokenize(document, false).unwrap();
        assert_eq!(tokenized.unterminated, Some(5));

        // Degraded conversion closes the fence; a second pass is clean.
        let rendered = serialize(&build(tokenized.spans));
        let again = tokenize(&rendered, false).unwrap();
        assert!(again.unterminated.is_none());
        assert_eq!(
            again.spans,
            vec![Span::prose("text"), Span::code("x = 1"), Span::prose("")]
        );
    }
}
