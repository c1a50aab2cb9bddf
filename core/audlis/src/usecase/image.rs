//! ブランド画像の生成
//!
//! 他のパイプラインとはデータを共有しない。失敗は「画像なし」として扱う。

use crate::domain::image::compose_prompt;
use crate::domain::ImageAsset;
use crate::ports::outbound::ImageSynthesizer;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct ImageUseCase {
    synthesizer: Arc<dyn ImageSynthesizer>,
    log: Arc<dyn Log>,
}

impl ImageUseCase {
    pub fn new(synthesizer: Arc<dyn ImageSynthesizer>, log: Arc<dyn Log>) -> Self {
        Self { synthesizer, log }
    }

    /// 画像を 1 枚生成する。空の文脈は既定のスタイルになる。失敗時は None。
    pub fn generate_image(&self, context: &str) -> Option<ImageAsset> {
        let prompt = compose_prompt(context);
        match self.synthesizer.synthesize_image(&prompt) {
            Ok(Some(asset)) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Info, "usecase", "image", "image generated")
                        .field("mime_type", asset.mime_type()),
                );
                Some(asset)
            }
            Ok(None) => {
                let _ = self.log.log(&LogRecord::new(
                    LogLevel::Warn,
                    "usecase",
                    "image",
                    "response contained no image part",
                ));
                None
            }
            Err(e) => {
                let _ = self.log.log(&LogRecord::new(
                    LogLevel::Warn,
                    "usecase",
                    "image",
                    format!("image synthesis failed: {}", e),
                ));
                None
            }
        }
    }
}
