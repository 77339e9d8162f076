//! CSV-backed glossary record store
//!
//! [`WordList`] keeps the glossary in memory as an ordered mapping from word to
//! its attribute list, and mirrors it to a CSV file on disk. The first CSV
//! record is the header; every following record with a non-blank first field
//! becomes an entry.
//!
//! ```text
//! 単語,説明,ジャンル        <- header
//! borrow,take a reference,rust
//! tokio,async runtime,crate
//! ```
//!
//! Entries keep first-insertion order. Adding a word that already exists
//! replaces its attributes in place.

pub mod errors;

pub use errors::{StoreError, StoreResult};

use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Header written when the backing file is missing or empty
pub const DEFAULT_HEADER: [&str; 3] = ["単語", "説明", "ジャンル"];

/// One glossary row: the word and whatever columns follow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub values: Vec<String>,
}

impl Entry {
    /// The full CSV record for this entry (`[word] + values`)
    pub fn record(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.word.as_str()).chain(self.values.iter().map(String::as_str))
    }
}

/// What [`WordList::add`] did with the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended at `index`
    Inserted { index: usize },
    /// An existing entry at `index` had its attributes replaced
    Replaced { index: usize },
}

impl AddOutcome {
    pub fn index(self) -> usize {
        match self {
            AddOutcome::Inserted { index } | AddOutcome::Replaced { index } => index,
        }
    }
}

/// In-memory glossary mirrored to a CSV file
#[derive(Debug)]
pub struct WordList {
    path: PathBuf,
    header: Vec<String>,
    entries: Vec<Entry>,
    /// word -> position in `entries`
    index: FxHashMap<String, usize>,
}

impl WordList {
    /// Open the glossary at `path` and load it.
    ///
    /// A missing file is not an error: the list starts empty with
    /// [`DEFAULT_HEADER`] and the file is created on the first [`add`](Self::add).
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let mut list = WordList {
            path: path.into(),
            header: default_header(),
            entries: Vec::new(),
            index: FxHashMap::default(),
        };
        list.load()?;
        Ok(list)
    }

    /// Re-read the backing file, replacing the in-memory state.
    ///
    /// The file is parsed into a fresh list first; on any error `self` is left
    /// exactly as it was, so a later [`save`](Self::save) cannot write back a
    /// partial read.
    pub fn load(&mut self) -> StoreResult<()> {
        let mut staged = WordList {
            path: self.path.clone(),
            header: default_header(),
            entries: Vec::new(),
            index: FxHashMap::default(),
        };

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=store_load status=missing path={}",
                    self.path.display()
                );
                *self = staged;
                return Ok(());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = reader.records();

        if let Some(record) = records.next() {
            let record = record.map_err(|e| StoreError::csv(&self.path, e))?;
            staged.header = record.iter().map(str::to_string).collect();
        }

        let mut skipped = 0usize;
        for record in records {
            let record = record.map_err(|e| StoreError::csv(&self.path, e))?;
            let mut fields = record.iter();
            match fields.next() {
                Some(word) if !word.trim().is_empty() => {
                    let values = fields.map(str::to_string).collect();
                    staged.upsert(word.to_string(), values);
                }
                _ => skipped += 1,
            }
        }

        info!(
            "event=store_load status=ok path={} entries={} skipped={}",
            self.path.display(),
            staged.entries.len(),
            skipped
        );
        *self = staged;
        Ok(())
    }

    /// Set `word` to `[description, genre]` and persist the list.
    ///
    /// The word is stored verbatim; it is only trimmed to check that it is not
    /// blank. Nothing changes when it is. If saving fails the change is rolled
    /// back, so the list still matches what was last on disk.
    pub fn add(&mut self, word: &str, description: &str, genre: &str) -> StoreResult<AddOutcome> {
        if word.trim().is_empty() {
            return Err(StoreError::EmptyWord);
        }

        let previous = self.get(word).map(<[String]>::to_vec);
        let outcome = self.upsert(
            word.to_string(),
            vec![description.to_string(), genre.to_string()],
        );
        debug!("event=store_add word={:?} outcome={:?}", word, outcome);

        if let Err(err) = self.save() {
            warn!(
                "event=store_add status=rolled_back word={:?} error={}",
                word, err
            );
            match (outcome, previous) {
                (AddOutcome::Replaced { index }, Some(values)) => {
                    self.entries[index].values = values;
                }
                _ => {
                    self.entries.pop();
                    self.index.remove(word);
                }
            }
            return Err(err);
        }
        Ok(outcome)
    }

    /// Rewrite the backing file from the in-memory state
    pub fn save(&self) -> StoreResult<()> {
        let file = File::create(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        writer
            .write_record(&self.header)
            .map_err(|e| StoreError::csv(&self.path, e))?;
        for entry in &self.entries {
            writer
                .write_record(entry.record())
                .map_err(|e| StoreError::csv(&self.path, e))?;
        }
        writer.flush().map_err(|e| StoreError::io(&self.path, e))?;

        info!(
            "event=store_save status=ok path={} entries={}",
            self.path.display(),
            self.entries.len()
        );
        Ok(())
    }

    /// Plain-text rendering: one comma-separated line per record, header first
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(self.header.join(", "));
        for entry in &self.entries {
            lines.push(entry.record().collect::<Vec<_>>().join(", "));
        }
        lines.join("\n")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Attributes stored for `word`, matched exactly
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.index
            .get(word)
            .map(|&i| self.entries[i].values.as_slice())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Position of `word` in entry order
    pub fn position(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn upsert(&mut self, word: String, values: Vec<String>) -> AddOutcome {
        if let Some(&index) = self.index.get(&word) {
            self.entries[index].values = values;
            return AddOutcome::Replaced { index };
        }
        let index = self.entries.len();
        self.index.insert(word.clone(), index);
        self.entries.push(Entry { word, values });
        AddOutcome::Inserted { index }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn default_header() -> Vec<String> {
    DEFAULT_HEADER.iter().map(|s| s.to_string()).collect()
}
