//! アプリケーション状態（エントリストアと現在のロケール）を持つコントローラ
//!
//! 集計は `entries()` のスナップショットに対する純粋関数として行う。

use crate::domain::analytics::Dashboard;
use crate::domain::{ImageAsset, KnowledgeEntry, Locale};
use crate::ports::outbound::{
    EntryPersistence, ImageSynthesizer, KnowledgeSynthesizer, LocalePreference,
};
use crate::usecase::{EntryStore, ImageUseCase, IngestUseCase};
use common::domain::RecordId;
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator, Log, LogLevel, LogRecord};
use std::sync::{Arc, Mutex};

/// 重複した id を引き直す上限
const MAX_ID_ATTEMPTS: usize = 32;

/// AudlisApp の組み立てに必要なポート
pub struct AppDeps {
    pub persistence: Arc<dyn EntryPersistence>,
    pub locale_preference: Arc<dyn LocalePreference>,
    pub synthesizer: Arc<dyn KnowledgeSynthesizer>,
    pub image_synthesizer: Arc<dyn ImageSynthesizer>,
    pub clock: Arc<dyn Clock>,
    pub id_gen: Arc<dyn IdGenerator>,
    pub log: Arc<dyn Log>,
}

pub struct AudlisApp {
    store: EntryStore,
    locale: Mutex<Locale>,
    locale_preference: Arc<dyn LocalePreference>,
    ingest: IngestUseCase,
    image: ImageUseCase,
    clock: Arc<dyn Clock>,
    id_gen: Arc<dyn IdGenerator>,
    log: Arc<dyn Log>,
}

impl AudlisApp {
    /// ロケール設定とエントリストアを読み込んで起動する
    pub fn start(deps: AppDeps) -> Self {
        let locale = match deps.locale_preference.load() {
            Ok(locale) => locale.unwrap_or_default(),
            Err(e) => {
                let _ = deps.log.log(&LogRecord::new(
                    LogLevel::Warn,
                    "usecase",
                    "locale",
                    format!("locale preference unreadable: {}", e),
                ));
                Locale::default()
            }
        };
        let store = EntryStore::load(
            deps.persistence,
            locale,
            deps.clock.now_ms(),
            Arc::clone(&deps.log),
        );
        Self {
            store,
            locale: Mutex::new(locale),
            locale_preference: deps.locale_preference,
            ingest: IngestUseCase::new(deps.synthesizer, Arc::clone(&deps.log)),
            image: ImageUseCase::new(deps.image_synthesizer, Arc::clone(&deps.log)),
            clock: deps.clock,
            id_gen: deps.id_gen,
            log: deps.log,
        }
    }

    pub fn locale(&self) -> Locale {
        *self.locale.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// ロケールを切り替えて保存する。以後の取り込みに使われる。
    pub fn set_locale(&self, locale: Locale) -> Result<(), Error> {
        *self.locale.lock().unwrap_or_else(|p| p.into_inner()) = locale;
        self.locale_preference.save(locale)
    }

    /// 転写文を取り込み、エントリを作って先頭に保存する。常にエントリを返す。
    pub fn capture(&self, transcript: &str) -> KnowledgeEntry {
        let locale = self.locale();
        let draft = self.ingest.ingest(transcript, locale);
        let entry = KnowledgeEntry::from_draft(
            self.fresh_id(),
            self.clock.now_ms(),
            transcript,
            draft,
            locale,
        );
        if let Err(e) = self.store.insert(entry.clone()) {
            let _ = self.log.log(
                &LogRecord::new(
                    LogLevel::Warn,
                    "usecase",
                    "store",
                    format!("failed to persist entry: {}", e),
                )
                .field("id", entry.id.as_str()),
            );
        }
        entry
    }

    /// 保存済みの id と重ならない id。
    ///
    /// 生成器はプロセス内では重複しないが、前回の実行分（時計の巻き戻りなど）とは重なりうる。
    fn fresh_id(&self) -> RecordId {
        let mut id = self.id_gen.next_id();
        for _ in 1..MAX_ID_ATTEMPTS {
            if !self.store.contains_id(&id) {
                break;
            }
            id = self.id_gen.next_id();
        }
        id
    }

    /// 音声入力の代わりにロケールのデモ転写文を取り込む
    pub fn capture_demo(&self) -> KnowledgeEntry {
        let transcript = self.locale().demo_transcript();
        self.capture(transcript)
    }

    pub fn entries(&self) -> Vec<KnowledgeEntry> {
        self.store.all()
    }

    pub fn recent(&self, n: usize) -> Vec<KnowledgeEntry> {
        self.store.recent(n)
    }

    pub fn search(&self, query: &str) -> Vec<KnowledgeEntry> {
        self.store.search(query)
    }

    pub fn dashboard(&self, weeks: usize) -> Dashboard {
        Dashboard::compute(&self.store.all(), self.clock.now_ms(), weeks)
    }

    pub fn generate_image(&self, context: &str) -> Option<ImageAsset> {
        self.image.generate_image(context)
    }

    pub fn reset(&self) -> Result<(), Error> {
        self.store.reset()
    }
}
