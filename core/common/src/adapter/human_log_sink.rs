//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! --verbose 時に FileJsonLog と併用する。fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = record.fields.as_ref().filter(|f| !f.is_empty()) else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 1 行に整形する（テストのため分離）
fn format_line(record: &LogRecord) -> String {
    let scope = match (&record.layer, &record.kind) {
        (Some(l), Some(k)) => format!("{}/{}", l, k),
        (Some(l), None) => l.clone(),
        (None, Some(k)) => k.clone(),
        (None, None) => "-".to_string(),
    };
    let summary = fields_summary(record);
    if summary.is_empty() {
        format!("[{}] {} {}", record.level.as_str(), scope, record.message)
    } else {
        format!("[{}] {} {} {}", record.level.as_str(), scope, record.message, summary)
    }
}

/// stderr に整形して出力する Log 実装
#[derive(Debug, Clone)]
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    /// `min_level` より詳細なレコードは出さない
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for StderrLog {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

fn severity(level: LogLevel) -> u8 {
    match level {
        LogLevel::Error => 0,
        LogLevel::Warn => 1,
        LogLevel::Info => 2,
        LogLevel::Debug => 3,
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if severity(record.level) > severity(self.min_level) {
            return Ok(());
        }
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
