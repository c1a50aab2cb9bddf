//! Gemini の画像モデルを使う ImageSynthesizer

use crate::domain::ImageAsset;
use crate::ports::outbound::ImageSynthesizer;
use common::domain::ModelName;
use common::error::Error;
use common::llm::first_inline_data;
use common::ports::outbound::GenerativeModel;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GeminiImageSynthesizer {
    model: Arc<dyn GenerativeModel>,
    model_name: ModelName,
    aspect_ratio: String,
}

impl GeminiImageSynthesizer {
    pub fn new(
        model: Arc<dyn GenerativeModel>,
        model_name: ModelName,
        aspect_ratio: impl Into<String>,
    ) -> Self {
        Self {
            model,
            model_name,
            aspect_ratio: aspect_ratio.into(),
        }
    }

    fn payload(&self, prompt: &str) -> Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseModalities": ["IMAGE"],
                "imageConfig": { "aspectRatio": self.aspect_ratio }
            }
        })
    }
}

impl ImageSynthesizer for GeminiImageSynthesizer {
    fn synthesize_image(&self, prompt: &str) -> Result<Option<ImageAsset>, Error> {
        let response = self
            .model
            .generate_content(&self.model_name, &self.payload(prompt))?;
        Ok(first_inline_data(&response)
            .map(|inline| ImageAsset::from_inline(inline.mime_type.as_deref(), &inline.data)))
    }
}
