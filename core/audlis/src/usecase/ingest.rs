//! 転写文の取り込み（外部合成 → 検証 → ドラフト）
//!
//! 外部サービスの失敗は呼び出し元に伝えない。必ず使えるドラフトを返す。

use crate::domain::{Locale, SynthesisDraft, SynthesisRequest};
use crate::ports::outbound::KnowledgeSynthesizer;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct IngestUseCase {
    synthesizer: Arc<dyn KnowledgeSynthesizer>,
    log: Arc<dyn Log>,
}

impl IngestUseCase {
    pub fn new(synthesizer: Arc<dyn KnowledgeSynthesizer>, log: Arc<dyn Log>) -> Self {
        Self { synthesizer, log }
    }

    /// 転写文からドラフトを作る。合成・復号に失敗したらフォールバック値。
    pub fn ingest(&self, transcript: &str, locale: Locale) -> SynthesisDraft {
        let request = SynthesisRequest::new(transcript, locale);
        match self.try_ingest(&request) {
            Ok(draft) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Info, "usecase", "ingest", "synthesis succeeded")
                        .field("locale", locale.as_str())
                        .field("category", draft.category.as_str())
                        .field("value_score", draft.value_score.get()),
                );
                draft
            }
            Err(e) => {
                let _ = self.log.log(
                    &LogRecord::new(
                        LogLevel::Warn,
                        "usecase",
                        "ingest",
                        format!("synthesis failed, using fallback: {}", e),
                    )
                    .field("locale", locale.as_str())
                    .field("transcript_chars", transcript.chars().count()),
                );
                SynthesisDraft::fallback(transcript, locale)
            }
        }
    }

    fn try_ingest(&self, request: &SynthesisRequest) -> Result<SynthesisDraft, Error> {
        let text = self.synthesizer.synthesize(request)?;
        SynthesisDraft::decode(&text, request.locale)
    }
}
