use super::tokenizer::FENCE;
use crate::model::{Cell, CellType};
use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Flattens cells back into fenced-block text.
///
/// Markdown sources are appended verbatim. A code cell is wrapped in fence
/// marker lines; a marker is a *line*, so a newline is inserted first
/// whenever the output so far does not already end at a line boundary. No
/// other separator is ever added between cells: blank-line separation is
/// the cells' own business, which is the declared boundary of the
/// round-trip guarantee.
pub fn serialize(cells: &[Cell]) -> String {
    let mut out = String::new();
    for cell in cells {
        match cell.cell_type {
            CellType::Markdown => {
                for line in &cell.source {
                    out.push_str(line);
                }
            }
            CellType::Code => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(FENCE);
                out.push('\n');
                for line in &cell.source {
                    out.push_str(line);
                }
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(FENCE);
                out.push('\n');
            }
        }
    }
    out
}

/// Collapses runs of three or more newlines down to a single blank line.
/// Applied to rendered markdown before it is written out.
pub fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUNS.replace_all(text, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellType;

    fn markdown(lines: &[&str]) -> Cell {
        Cell::new(
            CellType::Markdown,
            lines.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn code(lines: &[&str]) -> Cell {
        Cell::new(CellType::Code, lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_markdown_cell_is_verbatim() {
        let text = serialize(&[markdown(&["# Title\n", "\n", "body"])]);
        assert_eq!(text, "# Title\n\nbody");
    }

    #[test]
    fn test_code_cell_is_fenced() {
        let text = serialize(&[code(&["x = 1\n", "y = 2"])]);
        assert_eq!(text, "```\nx = 1\ny = 2\n```\n");
    }

    #[test]
    fn test_marker_starts_on_a_fresh_line() {
        // The preceding markdown cell does not end with a newline; the
        // opening marker must still begin a line of its own.
        let text = serialize(&[markdown(&["intro"]), code(&["x"])]);
        assert_eq!(text, "intro\n```\nx\n```\n");
    }

    #[test]
    fn test_empty_code_cell_renders_adjacent_markers() {
        let text = serialize(&[code(&[])]);
        assert_eq!(text, "```\n```\n");
    }

    #[test]
    fn test_empty_markdown_cell_adds_nothing() {
        let text = serialize(&[code(&["a"]), markdown(&[]), code(&["b"])]);
        assert_eq!(text, "```\na\n```\n```\nb\n```\n");
    }

    #[test]
    fn test_no_separator_is_invented_between_cells() {
        let text = serialize(&[markdown(&["one\n"]), markdown(&["two"])]);
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn test_collapse_blank_runs() {
        assert_eq!(collapse_blank_runs("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_runs("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_runs("a\nb"), "a\nb");
    }
}
