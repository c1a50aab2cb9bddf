//! エントリストア（新しい順のメモリ上の集合 + 永続化）
//!
//! 書き込みは Mutex で直列化し、変更のたびに集合全体を保存する。
//! 件数不足のときはサンプルエントリで始めて保存する。読み込めないときは元の内容を
//! 退避し、サンプルはメモリ上だけで使う。

use crate::domain::seed::seed_entries;
use crate::domain::{KnowledgeEntry, Locale};
use crate::ports::outbound::EntryPersistence;
use common::domain::RecordId;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::{Arc, Mutex, MutexGuard};

/// これ未満の件数しか保存されていなければサンプルで置き換える
pub const MIN_PLAUSIBLE_ENTRIES: usize = 2;

pub struct EntryStore {
    entries: Mutex<Vec<KnowledgeEntry>>,
    persistence: Arc<dyn EntryPersistence>,
    log: Arc<dyn Log>,
}

impl EntryStore {
    /// 保存済みの集合を読み込む。失敗しない。
    pub fn load(
        persistence: Arc<dyn EntryPersistence>,
        locale: Locale,
        now_ms: u64,
        log: Arc<dyn Log>,
    ) -> Self {
        let entries = match persistence.load() {
            Ok(entries) if entries.len() >= MIN_PLAUSIBLE_ENTRIES => entries,
            Ok(entries) => {
                let _ = log.log(
                    &LogRecord::new(LogLevel::Info, "usecase", "store", "seeding entry store")
                        .field("persisted", entries.len()),
                );
                let seeds = seed_entries(locale, now_ms);
                if let Err(e) = persistence.save(&seeds) {
                    let _ = log.log(&LogRecord::new(
                        LogLevel::Warn,
                        "usecase",
                        "store",
                        format!("failed to persist seed entries: {}", e),
                    ));
                }
                seeds
            }
            // 読めない保存内容は上書きしない。サンプルはメモリ上だけで使う。
            Err(e) => {
                let _ = log.log(&LogRecord::new(
                    LogLevel::Warn,
                    "usecase",
                    "store",
                    format!("entry store unreadable, serving seeds: {}", e),
                ));
                if let Err(e) = persistence.back_up_unreadable() {
                    let _ = log.log(&LogRecord::new(
                        LogLevel::Warn,
                        "usecase",
                        "store",
                        format!("failed to back up unreadable entries: {}", e),
                    ));
                }
                seed_entries(locale, now_ms)
            }
        };
        Self {
            entries: Mutex::new(entries),
            persistence,
            log,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<KnowledgeEntry>> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// 先頭に追加して集合全体を保存する。
    ///
    /// 既にある id は受け付けない（何も変更せず InvalidArgument）。
    /// 保存に失敗してもメモリ上には残る（Err は呼び出し側がログに出す）。
    pub fn insert(&self, entry: KnowledgeEntry) -> Result<(), Error> {
        let mut entries = self.lock();
        if entries.iter().any(|e| e.id == entry.id) {
            return Err(Error::invalid_argument(format!(
                "Duplicate entry id '{}'",
                entry.id
            )));
        }
        entries.insert(0, entry);
        self.persistence.save(&entries)
    }

    pub fn contains_id(&self, id: &RecordId) -> bool {
        self.lock().iter().any(|e| &e.id == id)
    }

    /// 全件のスナップショット（新しい順）
    pub fn all(&self) -> Vec<KnowledgeEntry> {
        self.lock().clone()
    }

    pub fn recent(&self, n: usize) -> Vec<KnowledgeEntry> {
        self.lock().iter().take(n).cloned().collect()
    }

    /// タイトルの部分一致（大文字小文字を区別しない）。空の検索語は全件。
    pub fn search(&self, query: &str) -> Vec<KnowledgeEntry> {
        let needle = query.trim().to_lowercase();
        self.lock()
            .iter()
            .filter(|e| needle.is_empty() || e.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// メモリ上と保存済みの集合を空にする
    pub fn reset(&self) -> Result<(), Error> {
        let mut entries = self.lock();
        entries.clear();
        let _ = self.log.log(&LogRecord::new(
            LogLevel::Info,
            "usecase",
            "store",
            "entry store reset",
        ));
        self.persistence.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::stubs::{InMemoryKeyValueStorage, RecordingLog};
    use crate::adapter::KeyValueEntryPersistence;
    use crate::adapter::kv_persistence::{ENTRIES_KEY, UNREADABLE_ENTRIES_KEY};
    use crate::domain::{Category, SynthesisDraft};
    use crate::ports::outbound::KeyValueStorage;
    use std::sync::atomic::Ordering;

    const NOW: u64 = 1_767_614_400_000;

    fn entry(id: &str, title: &str) -> KnowledgeEntry {
        let mut draft = SynthesisDraft::defaults(Locale::En);
        draft.title = title.to_string();
        KnowledgeEntry::from_draft(RecordId::new(id), NOW, "raw", draft, Locale::En)
    }

    fn store_over(storage: Arc<InMemoryKeyValueStorage>) -> (EntryStore, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let persistence = Arc::new(KeyValueEntryPersistence::new(storage));
        (EntryStore::load(persistence, Locale::En, NOW, log.clone()), log)
    }

    #[test]
    fn test_empty_storage_is_seeded_and_persisted() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage.clone());
        assert_eq!(store.all(), seed_entries(Locale::En, NOW));
        assert!(storage.get(ENTRIES_KEY).unwrap().is_some());
    }

    #[test]
    fn test_single_persisted_entry_is_replaced_by_seeds() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let one = serde_json::to_string(&vec![entry("x", "Lonely")]).unwrap();
        storage.set(ENTRIES_KEY, &one).unwrap();
        let (store, _) = store_over(storage);
        assert_eq!(store.all().len(), 3);
        assert!(store.search("lonely").is_empty());
    }

    #[test]
    fn test_corrupt_storage_is_seeded_with_warning() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        storage.set(ENTRIES_KEY, "[{broken").unwrap();
        let (store, log) = store_over(storage.clone());
        assert_eq!(store.all().len(), 3);
        assert_eq!(log.warnings().len(), 1);
        assert_eq!(storage.get(ENTRIES_KEY).unwrap().as_deref(), Some("[{broken"));
    }

    #[test]
    fn test_one_bad_record_does_not_destroy_persisted_entries() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let mut records: Vec<serde_json::Value> = (0..50)
            .map(|i| serde_json::to_value(entry(&format!("u{}", i), "User note")).unwrap())
            .collect();
        records.push(serde_json::json!({ "title": "missing id and createdAt" }));
        let blob = serde_json::to_string(&records).unwrap();
        storage.set(ENTRIES_KEY, &blob).unwrap();

        let (store, _) = store_over(storage.clone());
        assert_eq!(store.all(), seed_entries(Locale::En, NOW));
        assert_eq!(storage.get(ENTRIES_KEY).unwrap().as_deref(), Some(blob.as_str()));

        // 以後の保存で本体が置き換わっても退避先に残る
        store.insert(entry("new", "Fresh")).unwrap();
        assert_eq!(
            storage.get(UNREADABLE_ENTRIES_KEY).unwrap().as_deref(),
            Some(blob.as_str())
        );
    }

    #[test]
    fn test_plausible_collection_is_kept() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let saved = vec![entry("b", "Second"), entry("a", "First")];
        storage
            .set(ENTRIES_KEY, &serde_json::to_string(&saved).unwrap())
            .unwrap();
        let (store, _) = store_over(storage);
        assert_eq!(store.all(), saved);
    }

    #[test]
    fn test_insert_prepends_in_reverse_insertion_order() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage);
        store.reset().unwrap();
        for i in 0..5 {
            store.insert(entry(&format!("n{}", i), "t")).unwrap();
            assert_eq!(store.all()[0].id.as_str(), format!("n{}", i));
        }
        let ids: Vec<_> = store.all().iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids, vec!["n4", "n3", "n2", "n1", "n0"]);
    }

    #[test]
    fn test_insert_persists_whole_collection() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage.clone());
        store.insert(entry("new", "Fresh")).unwrap();
        let reloaded = KeyValueEntryPersistence::new(storage).load().unwrap();
        assert_eq!(reloaded, store.all());
        assert_eq!(reloaded.len(), 4);
    }

    #[test]
    fn test_insert_keeps_entry_in_memory_when_save_fails() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage.clone());
        storage.fail_writes.store(true, Ordering::SeqCst);
        assert!(store.insert(entry("new", "Fresh")).is_err());
        assert_eq!(store.all()[0].id.as_str(), "new");
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage.clone());
        store.insert(entry("dup", "First")).unwrap();
        let err = store.insert(entry("dup", "Second")).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert_eq!(store.all().len(), 4);
        assert_eq!(store.all()[0].title, "First");
        assert!(store.contains_id(&RecordId::new("dup")));
        assert!(!store.contains_id(&RecordId::new("other")));
        assert_eq!(KeyValueEntryPersistence::new(storage).load().unwrap().len(), 4);
    }

    #[test]
    fn test_recent_and_search() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage);
        store.insert(entry("p", "Pricing Review")).unwrap();
        assert_eq!(store.recent(2).len(), 2);
        assert_eq!(store.recent(2)[0].id.as_str(), "p");
        assert_eq!(store.recent(100).len(), 4);
        let hits = store.search("PRICING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::Operations);
        assert_eq!(store.search("").len(), 4);
    }

    #[test]
    fn test_reset_then_reload_seeds_again() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage.clone());
        store.insert(entry("p", "Pricing")).unwrap();
        store.reset().unwrap();
        assert_eq!(store.all().len(), 0);
        assert_eq!(storage.get(ENTRIES_KEY).unwrap(), None);
        let (reloaded, _) = store_over(storage);
        assert_eq!(reloaded.all(), seed_entries(Locale::En, NOW));
    }

    #[test]
    fn test_concurrent_inserts_are_serialized() {
        let storage = Arc::new(InMemoryKeyValueStorage::default());
        let (store, _) = store_over(storage.clone());
        let store = Arc::new(store);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert(entry(&format!("c{}", i), "t")).unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.all().len(), 11);
        let reloaded = KeyValueEntryPersistence::new(storage).load().unwrap();
        assert_eq!(reloaded, store.all());
    }
}
