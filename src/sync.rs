//! The batch driver: discovers locale folders and runs the
//! load → merge → commit pipeline over each of them.
//!
//! The run is single-threaded and fail-fast. Each store is owned by the
//! iteration that loaded it and dropped once its file is committed; the
//! only state carried across iterations is the base store, which is read
//! once and never mutated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::Error, store::TranslationStore, traits::Parser};

/// Configuration for one maintenance pass over a `_locales` tree.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Directory containing one subfolder per locale.
    pub root: PathBuf,
    /// Name of the base-language folder (conventionally `en`).
    pub base_folder: String,
    /// Translation file name inside each locale folder.
    pub file_name: String,
}

/// Lists the locale folders under `root`, excluding the base folder.
///
/// Non-directories are skipped. Names are sorted so that processing order
/// (and therefore console output) is deterministic across filesystems.
pub fn discover_locale_folders(root: &Path, base_folder: &str) -> Result<Vec<String>, Error> {
    let dir = fs::read_dir(root).map_err(|e| Error::unreadable(root, e))?;

    let mut folders = Vec::new();
    for entry in dir {
        let entry = entry.map_err(|e| Error::unreadable(root, e))?;
        let file_type = entry.file_type().map_err(|e| Error::unreadable(entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == base_folder {
            continue;
        }
        folders.push(name);
    }

    folders.sort();
    Ok(folders)
}

/// Runs one full maintenance pass.
///
/// Loads the base file, reports its message count, and commits it back so
/// even the base gets canonical formatting. Then every peer folder is
/// loaded, merged against the base, committed, and its untranslated count
/// reported. The first error aborts the whole run; no further folders are
/// touched and nothing is partially written.
pub fn run(options: &SyncOptions) -> Result<(), Error> {
    let base_path = options
        .root
        .join(&options.base_folder)
        .join(&options.file_name);

    let base = TranslationStore::read_from(&base_path)?;
    println!("Number of messages: {}", base.len());
    base.write_to(&base_path)?;

    for folder in discover_locale_folders(&options.root, &options.base_folder)? {
        let path = options.root.join(&folder).join(&options.file_name);

        let mut store = TranslationStore::read_from(&path)?;
        let missing = store.merge(&base);
        store.write_to(&path)?;

        println!("Folder \"{folder}\" has {missing} untranslated messages.");
    }

    Ok(())
}
