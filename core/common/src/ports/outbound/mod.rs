//! Outbound ポート: アプリが外界（FS・時刻・ID・ログ・環境変数・生成モデル）を使うための trait

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod generative_model;
pub mod id_generator;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::{staging_path, FileSystem};
pub use generative_model::GenerativeModel;
pub use id_generator::IdGenerator;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
