use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::{Path, PathBuf};

/// How far ahead in the size-sorted list each file is compared. Identical
/// files have identical sizes, so sorting by size puts them next to each
/// other and a bounded window is enough.
const COMPARE_WINDOW: usize = 50;

pub fn run<S: DocumentStore>(
    store: &mut S,
    dir: &Path,
    extensions: &[String],
    skip_confirm: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // 1. Collect candidates sorted by size
    let files = store.list_files(dir, extensions)?;
    let mut sized = Vec::with_capacity(files.len());
    for file in files {
        let size = store.file_size(&file)?;
        sized.push((size, file));
    }
    sized.sort();

    // 2. Compare each file against its size-sorted neighbours
    let duplicates = find_duplicates(store, &mut sized)?;

    if duplicates.is_empty() {
        result.add_message(CmdMessage::success("No duplicate files found."));
        return Ok(result);
    }

    // 3. Remove, or report what would be removed
    if skip_confirm {
        for dup in &duplicates {
            store.remove_file(dup)?;
            result.removed.push(dup.clone());
            result.add_message(CmdMessage::info(format!("Removed: {}", dup.display())));
        }
        result.add_message(CmdMessage::success(format!(
            "Removed {} duplicate file(s)",
            result.removed.len()
        )));
    } else {
        for dup in &duplicates {
            result.add_message(CmdMessage::warning(format!(
                "Duplicate: {}",
                dup.display()
            )));
        }
        result.add_message(CmdMessage::warning(format!(
            "{} duplicate file(s) found. Re-run with --yes to remove them.",
            duplicates.len()
        )));
    }
    Ok(result)
}

fn find_duplicates<S: DocumentStore>(
    store: &S,
    sized: &mut Vec<(u64, PathBuf)>,
) -> Result<Vec<PathBuf>> {
    let mut duplicates = Vec::new();
    let mut n = 0;
    while n < sized.len() {
        let mut m = n + 1;
        let mut scanned = 0;
        while m < sized.len() && scanned < COMPARE_WINDOW {
            scanned += 1;
            if sized[n].0 == sized[m].0
                && store.read_bytes(&sized[n].1)? == store.read_bytes(&sized[m].1)?
            {
                let (_, dup) = sized.remove(m);
                duplicates.push(dup);
            } else {
                m += 1;
            }
        }
        n += 1;
    }
    Ok(duplicates)
}
