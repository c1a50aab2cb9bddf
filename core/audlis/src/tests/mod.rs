//! 複数モジュールにまたがるシナリオテスト（ネットワーク・実ストレージを使わない）

mod dashboard_scenario_tests;
mod run_app_tests;

use std::sync::Arc;

use crate::adapter::stubs::{
    FixedClock, InMemoryKeyValueStorage, RecordingLog, SeqIdGenerator, StubImageSynthesizer,
    StubKnowledgeSynthesizer,
};
use crate::adapter::{KeyValueEntryPersistence, KeyValueLocalePreference};
use crate::ports::outbound::{ImageSynthesizer, KeyValueStorage, KnowledgeSynthesizer};
use crate::usecase::{AppDeps, AudlisApp};

/// 2026-01-05 (月) 12:00 UTC
pub(crate) const MONDAY_NOON: u64 = 1_767_614_400_000;

/// 任意のストレージ・合成器で AudlisApp を起動する
pub(crate) fn start_app(
    storage: Arc<dyn KeyValueStorage>,
    synthesizer: Arc<dyn KnowledgeSynthesizer>,
    image_synthesizer: Arc<dyn ImageSynthesizer>,
    log: Arc<RecordingLog>,
) -> AudlisApp {
    AudlisApp::start(AppDeps {
        persistence: Arc::new(KeyValueEntryPersistence::new(Arc::clone(&storage))),
        locale_preference: Arc::new(KeyValueLocalePreference::new(storage)),
        synthesizer,
        image_synthesizer,
        clock: Arc::new(FixedClock::stepping(MONDAY_NOON, 1_000)),
        id_gen: Arc::new(SeqIdGenerator::default()),
        log,
    })
}

/// メモリ上のストレージと固定応答の合成器で起動する
pub(crate) fn app_with(
    synthesizer: StubKnowledgeSynthesizer,
) -> (AudlisApp, Arc<InMemoryKeyValueStorage>, Arc<RecordingLog>) {
    let storage = Arc::new(InMemoryKeyValueStorage::default());
    let log = Arc::new(RecordingLog::default());
    let app = start_app(
        storage.clone(),
        Arc::new(synthesizer),
        Arc::new(StubImageSynthesizer::new(Ok(None))),
        log.clone(),
    );
    (app, storage, log)
}
