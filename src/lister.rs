use crate::debug;
use crate::github::{ContentLister, EntryKind, ListingError};
use crate::repository::Repository;

/// list every file under `root`, flattened in pre-order depth-first order
///
/// each directory is expanded in place at the position it was listed, so the
/// result matches a recursive walk while only keeping a stack of pending
/// listings. any listing failure aborts the whole walk.
pub fn list_files(
    lister: &impl ContentLister,
    repository: &Repository,
    root: &str,
) -> Result<Vec<String>, ListingError> {
    let root = root.trim_matches('/');
    let mut files = Vec::new();

    debug!("listing {}", display_path(root));
    let mut pending = vec![lister.list_directory(repository, root)?.into_iter()];

    while let Some(entries) = pending.last_mut() {
        let Some(entry) = entries.next() else {
            pending.pop();
            continue;
        };

        match entry.kind {
            EntryKind::File => files.push(entry.path),
            EntryKind::Dir => {
                debug!("listing {}", display_path(&entry.path));
                let children = lister.list_directory(repository, &entry.path)?;
                pending.push(children.into_iter());
            }
            // neither is a file in this tree nor listable through it
            EntryKind::Symlink | EntryKind::Submodule => {
                debug!("skipping {:?} {}", entry.kind, entry.path);
            }
        }
    }

    Ok(files)
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
