use crate::commands::{CmdMessage, CmdResult, DocEntry};
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::Path;

use super::helpers::{doc_title, relative_link};

pub fn run<S: DocumentStore>(store: &S, dir: &Path, extensions: &[String]) -> Result<CmdResult> {
    let files = store.list_files(dir, extensions)?;

    let entries: Vec<DocEntry> = files
        .into_iter()
        .map(|path| {
            let link = relative_link(dir, &path);
            let title = doc_title(store, &path);
            DocEntry { path, link, title }
        })
        .collect();

    let mut result = CmdResult::default().with_entries(entries);
    if result.entries.is_empty() {
        result.add_message(CmdMessage::info("No matching documents found."));
    }
    Ok(result)
}
