use crate::commands::{CmdMessage, CmdResult};
use crate::convert::{collapse_blank_runs, serialize};
use crate::error::Result;
use crate::model::Notebook;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

use super::helpers::{collect_files, output_path};

const NOTEBOOK_EXTENSIONS: &[&str] = &[".ipynb"];

pub fn run<S: DocumentStore>(
    store: &mut S,
    paths: &[PathBuf],
    out_dir: Option<&Path>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let extensions: Vec<String> = NOTEBOOK_EXTENSIONS.iter().map(|s| s.to_string()).collect();
    let files = collect_files(store, paths, &extensions, &mut result)?;
    if files.is_empty() {
        result.add_message(CmdMessage::info("No notebooks to convert."));
        return Ok(result);
    }

    for file in &files {
        let path = convert_file(store, file, out_dir)?;
        result.add_message(CmdMessage::info(format!("Converted: {}", file.display())));
        result.written.push(path);
    }

    result.add_message(CmdMessage::success(format!(
        "Converted {} notebook(s) to markdown",
        result.written.len()
    )));
    Ok(result)
}

fn convert_file<S: DocumentStore>(
    store: &mut S,
    file: &Path,
    out_dir: Option<&Path>,
) -> Result<PathBuf> {
    let json = store.read_text(file)?;
    let notebook = Notebook::from_json(&json)?;
    let markdown = collapse_blank_runs(&serialize(&notebook.cells));

    let path = output_path(file, out_dir, "md");
    store.write_text(&path, &markdown)?;
    Ok(path)
}
