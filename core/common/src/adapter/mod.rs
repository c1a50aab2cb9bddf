//! アダプター（ports の標準実装）
//!
//! usecase は ports の trait 経由でのみファイル・時刻・環境変数・ログに触れる。
//! ここにあるのは標準実装（Std*）とテストでも使える無害な実装。

pub mod file_json_log;
pub mod human_log_sink;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_id_generator;

pub use file_json_log::{CompositeLog, FileJsonLog, NoopLog};
pub use human_log_sink::StderrLog;
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_id_generator::StdIdGenerator;
