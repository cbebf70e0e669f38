#![forbid(unsafe_code)]
//! Maintenance toolkit for Chrome-extension style `_locales` trees.
//!
//! A `_locales` tree holds one folder per language, each containing a
//! `messages.json` file. One folder (conventionally `en`) is the base
//! language and is presumed complete. This crate reconciles every other
//! folder against the base: missing keys are filled with the base-language
//! text, stale keys are dropped, key order is normalized to the base
//! order, and duplicate keys are rejected outright. Files are written back
//! in a canonical pretty-printed form so that successive runs produce
//! minimal, reviewable diffs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use localesync::{SyncOptions, run};
//!
//! let options = SyncOptions {
//!     root: "_locales".into(),
//!     base_folder: "en".to_string(),
//!     file_name: "messages.json".to_string(),
//! };
//! run(&options)?;
//! # Ok::<(), localesync::Error>(())
//! ```
//!
//! Or work with a single file through the [`TranslationStore`] model:
//!
//! ```rust,no_run
//! use localesync::{TranslationStore, traits::Parser};
//!
//! let base = TranslationStore::read_from("_locales/en/messages.json")?;
//! let mut peer = TranslationStore::read_from("_locales/fr/messages.json")?;
//! let missing = peer.merge(&base);
//! peer.write_to("_locales/fr/messages.json")?;
//! println!("{missing} untranslated messages");
//! # Ok::<(), localesync::Error>(())
//! ```

pub mod encoder;
pub mod error;
pub mod store;
pub mod sync;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    encoder::{Value, encode},
    error::Error,
    store::{MessageRecord, TranslationStore},
    sync::{SyncOptions, discover_locale_folders, run},
};
