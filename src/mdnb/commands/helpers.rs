use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CellType, Notebook};
use crate::store::DocumentStore;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::path::{Path, PathBuf};

/// Expands the user's path arguments: directories are walked for matching
/// files, plain files pass through as-is, anything else gets a warning.
pub fn collect_files<S: DocumentStore>(
    store: &S,
    paths: &[PathBuf],
    extensions: &[String],
    result: &mut CmdResult,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if store.is_dir(path) {
            files.extend(store.list_files(path, extensions)?);
        } else if store.is_file(path) {
            files.push(path.clone());
        } else {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }
    Ok(files)
}

/// Where a converted file lands: same name with the new extension, either
/// beside the input or inside `out_dir`.
pub fn output_path(input: &Path, out_dir: Option<&Path>, extension: &str) -> PathBuf {
    let renamed = input.with_extension(extension);
    match (out_dir, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}

/// Forward-slash relative link for catalog entries, regardless of platform.
pub fn relative_link(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Display title for a document: its first Markdown heading (first markdown
/// cell for notebooks), falling back to the file name. Extraction is
/// best-effort; unreadable or unparseable files just get the fallback.
pub fn doc_title<S: DocumentStore>(store: &S, path: &Path) -> String {
    heading_for(store, path).unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("untitled")
            .to_string()
    })
}

fn heading_for<S: DocumentStore>(store: &S, path: &Path) -> Option<String> {
    let text = store.read_text(path).ok()?;
    let is_notebook = path
        .extension()
        .map(|ext| ext == "ipynb")
        .unwrap_or(false);

    if is_notebook {
        let notebook = Notebook::from_json(&text).ok()?;
        notebook
            .cells
            .iter()
            .filter(|cell| cell.cell_type == CellType::Markdown)
            .find_map(|cell| first_heading(&cell.source.concat()))
    } else {
        first_heading(&text)
    }
}

/// Text of the first non-empty heading in a Markdown document.
pub fn first_heading(text: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();
    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::Text(t) | Event::Code(t) => {
                if in_heading {
                    title.push_str(&t);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                title.clear();
                in_heading = false;
            }
            _ => {}
        }
    }
    None
}
