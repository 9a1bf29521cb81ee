use super::tokenizer::{Span, SpanKind};
use crate::model::{Cell, CellType};

/// Maps every span to exactly one cell. Pure and total: there is no failure
/// mode, and document order is preserved.
pub fn build(spans: Vec<Span>) -> Vec<Cell> {
    spans.into_iter().map(from_span).collect()
}

fn from_span(span: Span) -> Cell {
    let cell_type = match span.kind {
        SpanKind::Prose => CellType::Markdown,
        SpanKind::Code => CellType::Code,
    };
    Cell::new(cell_type, split_lines(&span.text))
}

/// Splits into lines that keep their own terminators; a CRLF sequence stays
/// inside its line, so the document's own convention survives untouched.
/// Empty text produces no lines at all.
fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
