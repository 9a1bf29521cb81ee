use crate::commands::{CmdMessage, CmdResult};
use crate::convert::{build, tokenize};
use crate::error::Result;
use crate::model::Notebook;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

use super::helpers::{collect_files, output_path};

pub fn run<S: DocumentStore>(
    store: &mut S,
    paths: &[PathBuf],
    out_dir: Option<&Path>,
    extensions: &[String],
    strict: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // 1. Expand directories into their matching files
    let files = collect_files(store, paths, extensions, &mut result)?;
    if files.is_empty() {
        result.add_message(CmdMessage::info("No documents to convert."));
        return Ok(result);
    }

    // 2. Convert each file; strict and encoding failures abort the batch
    for file in &files {
        let converted = convert_file(store, file, out_dir, strict)?;
        if let Some(offset) = converted.unterminated {
            result.add_message(CmdMessage::warning(format!(
                "{}: unterminated code fence at byte {}; converted anyway, review the source",
                file.display(),
                offset
            )));
        }
        result.add_message(CmdMessage::info(format!("Converted: {}", file.display())));
        result.written.push(converted.path);
    }

    result.add_message(CmdMessage::success(format!(
        "Converted {} document(s) to notebooks",
        result.written.len()
    )));
    Ok(result)
}

struct Converted {
    path: PathBuf,
    unterminated: Option<usize>,
}

fn convert_file<S: DocumentStore>(
    store: &mut S,
    file: &Path,
    out_dir: Option<&Path>,
    strict: bool,
) -> Result<Converted> {
    let text = store.read_text(file)?;
    let tokenized = tokenize(&text, strict)?;
    let notebook = Notebook::from_cells(build(tokenized.spans));
    let json = notebook.to_json()?;

    let path = output_path(file, out_dir, "ipynb");
    store.write_text(&path, &json)?;

    Ok(Converted {
        path,
        unterminated: tokenized.unterminated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MdnbError;
    use crate::model::CellType;
    use crate::store::memory::InMemoryStore;

    fn md_ext() -> Vec<String> {
        vec![".md".to_string()]
    }

    #[test]
    fn test_converts_file_beside_source() {
        let mut store = InMemoryStore::new();
        store.insert_text("/n/doc.md", "intro\n\n```py\nx = 1\n```\n");

        let result = run(&mut store, &[PathBuf::from("/n/doc.md")], None, &md_ext(), false).unwrap();

        assert_eq!(result.written, vec![PathBuf::from("/n/doc.ipynb")]);
        let notebook =
            Notebook::from_json(&store.read_text(Path::new("/n/doc.ipynb")).unwrap()).unwrap();
        assert_eq!(notebook.cells.len(), 3);
        assert_eq!(notebook.cells[0].cell_type, CellType::Markdown);
        assert_eq!(notebook.cells[0].source, vec!["intro".to_string()]);
        assert_eq!(notebook.cells[1].cell_type, CellType::Code);
        assert_eq!(notebook.cells[1].source, vec!["x = 1".to_string()]);
        assert_eq!(notebook.nbformat, 4);
        assert_eq!(notebook.nbformat_minor, 2);
    }

    #[test]
    fn test_converts_whole_directory_into_out_dir() {
        let mut store = InMemoryStore::new();
        store.insert_text("/n/a.md", "alpha\n");
        store.insert_text("/n/b.md", "beta\n");
        store.insert_text("/n/notes.txt", "ignored\n");

        let result = run(
            &mut store,
            &[PathBuf::from("/n")],
            Some(Path::new("/out")),
            &md_ext(),
            false,
        )
        .unwrap();

        assert_eq!(
            result.written,
            vec![PathBuf::from("/out/a.ipynb"), PathBuf::from("/out/b.ipynb")]
        );
        assert!(!store.contains(Path::new("/out/notes.ipynb")));
    }

    #[test]
    fn test_unterminated_fence_warns_but_converts() {
        let mut store = InMemoryStore::new();
        store.insert_text("/n/bad.md", "text\n```py\nx = 1\n");

        let result = run(&mut store, &[PathBuf::from("/n/bad.md")], None, &md_ext(), false).unwrap();

        assert!(store.contains(Path::new("/n/bad.ipynb")));
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("unterminated code fence at byte 5")));
    }

    #[test]
    fn test_strict_mode_fails_and_writes_nothing() {
        let mut store = InMemoryStore::new();
        store.insert_text("/n/bad.md", "text\n```py\nx = 1\n");

        let result = run(&mut store, &[PathBuf::from("/n/bad.md")], None, &md_ext(), true);

        assert!(matches!(result, Err(MdnbError::Tokenize(_))));
        assert!(!store.contains(Path::new("/n/bad.ipynb")));
    }

    #[test]
    fn test_missing_path_warns_instead_of_failing() {
        let mut store = InMemoryStore::new();

        let result = run(&mut store, &[PathBuf::from("/gone.md")], None, &md_ext(), false).unwrap();

        assert!(result.written.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Path not found")));
    }

    #[test]
    fn test_invalid_utf8_aborts_with_encoding_error() {
        let mut store = InMemoryStore::new();
        store.insert_bytes("/n/bad.md", &[0xff, 0xfe, 0x41]);

        let result = run(&mut store, &[PathBuf::from("/n/bad.md")], None, &md_ext(), false);
        assert!(matches!(result, Err(MdnbError::Encoding(_))));
    }
}
