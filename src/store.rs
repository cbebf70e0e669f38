//! The in-memory translation store: an order-preserving map from
//! translation keys to message records, loaded from one `messages.json`.
//!
//! A store is parsed in full, merged against the base store at most once,
//! serialized, and discarded. Order is significant throughout: it is the
//! source order after load, and the base order after merge.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::{MapAccess, Visitor};

use crate::{
    encoder::{Value, encode},
    error::Error,
    traits::Parser,
};

/// A single translation entry.
///
/// Records are immutable once read; merge only ever copies whole records,
/// never synthesizes new ones.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageRecord {
    /// The message text. `None` when the source record omitted the field;
    /// such records serialize as `"message": null` and count as
    /// untranslated. Extra fields in a source record are dropped.
    #[serde(default)]
    pub message: Option<String>,

    /// Optional comment for translators. Copied only if present in source.
    #[serde(default)]
    pub description: Option<String>,
}

impl MessageRecord {
    /// Whether this record carries a usable translation.
    ///
    /// An empty message is treated identically to a missing one: both are
    /// placeholders that merge will overwrite from the base.
    pub fn has_message(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// Deserialization target that keeps source order and every occurrence of a
/// key, so that duplicates survive parsing and can be rejected afterwards.
/// Collecting straight into a map would silently drop them.
struct RecordSeq(Vec<(String, MessageRecord)>);

impl<'de> Deserialize<'de> for RecordSeq {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RecordSeqVisitor;

        impl<'de> Visitor<'de> for RecordSeqVisitor {
            type Value = RecordSeq;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object mapping translation keys to message records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, MessageRecord>()? {
                    entries.push(entry);
                }
                Ok(RecordSeq(entries))
            }
        }

        deserializer.deserialize_map(RecordSeqVisitor)
    }
}

/// An ordered set of translation entries for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationStore {
    messages: IndexMap<String, MessageRecord>,
}

impl TranslationStore {
    /// Builds a store from `(key, record)` pairs in order, rejecting
    /// duplicate keys with [`Error::DuplicateKey`] naming the offender.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, MessageRecord)>,
    ) -> Result<Self, Error> {
        let mut messages = IndexMap::new();
        for (key, record) in entries {
            if messages.insert(key.clone(), record).is_some() {
                return Err(Error::DuplicateKey(key));
            }
        }
        Ok(TranslationStore { messages })
    }

    /// Whether `key` exists and carries a non-empty message.
    pub fn has_message(&self, key: &str) -> bool {
        self.messages
            .get(key)
            .is_some_and(MessageRecord::has_message)
    }

    /// Returns the record for `key`, if present.
    pub fn get_message(&self, key: &str) -> Option<&MessageRecord> {
        self.messages.get(key)
    }

    /// Iterates entries in store order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, MessageRecord> {
        self.messages.iter()
    }

    /// Iterates keys in store order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, MessageRecord> {
        self.messages.keys()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Reconciles this store against `base`.
    ///
    /// Walks `base` in base order and builds a fresh map: keys this store
    /// has a usable translation for keep their record, every other base key
    /// is copied from `base` verbatim and counted as missing, and keys
    /// absent from `base` are dropped. The new map replaces the old one in
    /// a single swap, so a store is never observable half-merged.
    ///
    /// Afterwards the key set and key order equal `base`'s exactly. Returns
    /// the number of entries filled from the base.
    pub fn merge(&mut self, base: &TranslationStore) -> usize {
        let mut merged = IndexMap::with_capacity(base.messages.len());
        let mut missing = 0;

        for (key, base_record) in &base.messages {
            match self.messages.get(key) {
                Some(record) if record.has_message() => {
                    merged.insert(key.clone(), record.clone());
                }
                _ => {
                    missing += 1;
                    merged.insert(key.clone(), base_record.clone());
                }
            }
        }

        self.messages = merged;
        missing
    }

    /// Lowers the store into the encoder's value model, in store order.
    fn to_values(&self) -> Vec<(String, Value)> {
        self.messages
            .iter()
            .map(|(key, record)| {
                let mut fields = Vec::with_capacity(2);
                fields.push((
                    "message".to_string(),
                    record
                        .message
                        .clone()
                        .map_or(Value::Null, Value::String),
                ));
                if let Some(description) = &record.description {
                    fields.push(("description".to_string(), Value::String(description.clone())));
                }
                (key.clone(), Value::Object(fields))
            })
            .collect()
    }
}

impl Parser for TranslationStore {
    /// Parses one `messages.json` in full. Malformed JSON fails with
    /// [`Error::Parse`]; a repeated top-level key fails with
    /// [`Error::DuplicateKey`].
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        let RecordSeq(entries) = serde_json::from_reader(reader).map_err(Error::Parse)?;
        Self::from_entries(entries)
    }

    /// Writes the canonical encoding, no trailing newline.
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let content = encode(&self.to_values(), 0);
        writer.write_all(content.as_bytes()).map_err(Error::Write)
    }
}
