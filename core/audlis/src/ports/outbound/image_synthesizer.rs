//! 画像合成 Outbound ポート

use crate::domain::ImageAsset;
use common::error::Error;

pub trait ImageSynthesizer: Send + Sync {
    /// 応答に画像 part が無ければ Ok(None)
    fn synthesize_image(&self, prompt: &str) -> Result<Option<ImageAsset>, Error>;
}
