use crate::commands::{CmdMessage, CmdResult, DocEntry};
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::Path;

use super::helpers::{doc_title, relative_link};

pub fn run<S: DocumentStore>(
    store: &mut S,
    dir: &Path,
    extensions: &[String],
    filename: &str,
) -> Result<CmdResult> {
    let files = store.list_files(dir, extensions)?;
    let catalog_path = dir.join(filename);

    let mut entries = Vec::new();
    for path in files {
        // The listing must not list itself.
        if path == catalog_path {
            continue;
        }
        let link = relative_link(dir, &path);
        let title = doc_title(store, &path);
        entries.push(DocEntry { path, link, title });
    }

    let listing: String = entries
        .iter()
        .map(|e| format!("- [{}]({})\n", e.title, e.link))
        .collect();
    store.write_text(&catalog_path, &listing)?;

    let mut result = CmdResult::default().with_entries(entries);
    result.written.push(catalog_path.clone());
    result.add_message(CmdMessage::success(format!(
        "Wrote {} entries to {}",
        result.entries.len(),
        catalog_path.display()
    )));
    Ok(result)
}
