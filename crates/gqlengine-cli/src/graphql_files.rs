use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The outcome of scanning paths for GraphQL files.
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<walkdir::Error>,
}

/// Adds a leading `.` to each extension that lacks one.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Finds every file at or under `paths` whose extension is in `exts`.
///
/// A lone file argument is kept even if its extension doesn't match, since
/// naming a single file is taken as asking for it explicitly.
pub(crate) fn find(paths: &[PathBuf], exts: &HashSet<String>) -> FoundFiles {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }
                    if has_ext(path, exts) {
                        log::trace!("Found GraphQL file at {path:#?}.");
                        found.file_paths.push(path.to_path_buf());
                    } else {
                        found.num_skipped += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(e);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        log::warn!(
            "Proceeding with {first_path:#?} even though it doesn't match any \
            of the expected file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped -= 1;
        found.file_paths.push(first_path.clone());
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}

fn has_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| exts.contains(&ext))
}
