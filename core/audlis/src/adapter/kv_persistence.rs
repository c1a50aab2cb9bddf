//! キー値ストレージ上のエントリ集合・ロケール設定
//!
//! エントリ集合は JSON 配列 1 つとして固定キーに保存する（バージョン欄なし）。

use crate::domain::{KnowledgeEntry, Locale};
use crate::ports::outbound::{EntryPersistence, KeyValueStorage, LocalePreference};
use common::error::Error;
use std::sync::Arc;

pub const ENTRIES_KEY: &str = "audlis_entries";
pub const LOCALE_KEY: &str = "audlis_lang";
/// 読めなかったエントリ集合の退避先
pub const UNREADABLE_ENTRIES_KEY: &str = "audlis_entries_unreadable";

pub struct KeyValueEntryPersistence {
    storage: Arc<dyn KeyValueStorage>,
}

impl KeyValueEntryPersistence {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl EntryPersistence for KeyValueEntryPersistence {
    fn load(&self) -> Result<Vec<KnowledgeEntry>, Error> {
        let Some(blob) = self.storage.get(ENTRIES_KEY)? else {
            return Ok(Vec::new());
        };
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(&blob)
            .map_err(|e| {
                Error::json(format!("Corrupt entry collection '{}': {}", ENTRIES_KEY, e))
            })?;
        Ok(entries.into_iter().map(KnowledgeEntry::normalized).collect())
    }

    fn save(&self, entries: &[KnowledgeEntry]) -> Result<(), Error> {
        let blob = serde_json::to_string(entries)?;
        self.storage.set(ENTRIES_KEY, &blob)
    }

    fn clear(&self) -> Result<(), Error> {
        self.storage.remove(ENTRIES_KEY)
    }

    fn back_up_unreadable(&self) -> Result<(), Error> {
        match self.storage.get(ENTRIES_KEY)? {
            Some(blob) => self.storage.set(UNREADABLE_ENTRIES_KEY, &blob),
            None => Ok(()),
        }
    }
}

pub struct KeyValueLocalePreference {
    storage: Arc<dyn KeyValueStorage>,
}

impl KeyValueLocalePreference {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

impl LocalePreference for KeyValueLocalePreference {
    fn load(&self) -> Result<Option<Locale>, Error> {
        Ok(self
            .storage
            .get(LOCALE_KEY)?
            .and_then(|s| Locale::parse(s.trim().trim_matches('"'))))
    }

    fn save(&self, locale: Locale) -> Result<(), Error> {
        self.storage.set(LOCALE_KEY, locale.as_str())
    }
}
