//! 配線: 標準アダプタで AudlisApp を組み立てる

use std::sync::Arc;

use common::adapter::{
    CompositeLog, FileJsonLog, StderrLog, StdClock, StdEnvResolver, StdFileSystem,
    StdIdGenerator,
};
use common::domain::HomeDir;
use common::error::Error;
use common::llm::{GeminiClient, OfflineModel};
use common::ports::outbound::{
    Clock, EnvResolver, FileSystem, GenerativeModel, IdGenerator, Log, LogLevel, LogRecord,
};

use crate::adapter::{
    FileKeyValueStorage, GeminiImageSynthesizer, GeminiKnowledgeSynthesizer,
    KeyValueEntryPersistence, KeyValueLocalePreference, Settings,
};
use crate::ports::outbound::KeyValueStorage;
use crate::usecase::{AppDeps, AudlisApp};

/// ストレージのサブディレクトリ（キーごとに 1 ファイル）
pub const STORAGE_DIR: &str = "storage";
/// 構造化ログの置き場（ホーム相対）
pub const LOG_FILE: &str = "logs/audlis.jsonl";

/// 配線時のスイッチ（CLI のグローバルオプション由来）
#[derive(Debug, Clone, Copy, Default)]
pub struct WireOptions {
    /// ログを stderr にも出す
    pub verbose: bool,
    /// 生成モデルを呼ばない（常にフォールバック）
    pub offline: bool,
}

/// 配線で組み立てたアプリとポート群（main の Command ディスパッチで利用）
pub struct App {
    pub audlis: AudlisApp,
    pub fs: Arc<dyn FileSystem>,
    pub logger: Arc<dyn Log>,
}

fn build_logger(fs: &Arc<dyn FileSystem>, home: &HomeDir, verbose: bool) -> Arc<dyn Log> {
    let file: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(fs), home.join(LOG_FILE)));
    if verbose {
        Arc::new(CompositeLog::new(vec![
            file,
            Arc::new(StderrLog::new(LogLevel::Debug)),
        ]))
    } else {
        file
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_audlis(options: WireOptions) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let home = env_resolver.resolve_home_dir()?;
    let logger = build_logger(&fs, &home, options.verbose);

    let settings = Settings::load(fs.as_ref(), &home)?;
    let _ = logger.log(
        &LogRecord::new(LogLevel::Debug, "wiring", "config", "settings loaded")
            .field("home", home.display().to_string())
            .field("text_model", settings.text_model.to_string())
            .field("image_model", settings.image_model.to_string())
            .field("offline", options.offline),
    );

    let model: Arc<dyn GenerativeModel> = if options.offline {
        Arc::new(OfflineModel)
    } else {
        Arc::new(GeminiClient::new(
            settings.base_url.clone(),
            settings.api_key_envs(),
            settings.timeout,
            Arc::clone(&env_resolver),
        ))
    };

    let _ = logger.log(
        &LogRecord::new(LogLevel::Debug, "wiring", "config", "generative model ready")
            .field("provider", model.name()),
    );

    let storage: Arc<dyn KeyValueStorage> =
        Arc::new(FileKeyValueStorage::new(Arc::clone(&fs), home.join(STORAGE_DIR)));
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let id_gen: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));

    let audlis = AudlisApp::start(AppDeps {
        persistence: Arc::new(KeyValueEntryPersistence::new(Arc::clone(&storage))),
        locale_preference: Arc::new(KeyValueLocalePreference::new(storage)),
        synthesizer: Arc::new(GeminiKnowledgeSynthesizer::new(
            Arc::clone(&model),
            settings.text_model.clone(),
        )),
        image_synthesizer: Arc::new(GeminiImageSynthesizer::new(
            model,
            settings.image_model.clone(),
            settings.aspect_ratio.clone(),
        )),
        clock,
        id_gen,
        log: Arc::clone(&logger),
    });

    Ok(App {
        audlis,
        fs,
        logger,
    })
}
