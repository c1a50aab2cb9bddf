//! Gemini を使う構造化合成（KnowledgeSynthesizer の標準実装）

use crate::domain::synthesis::SCHEMA_FIELDS;
use crate::domain::{Category, SynthesisRequest};
use crate::ports::outbound::KnowledgeSynthesizer;
use common::domain::ModelName;
use common::error::Error;
use common::llm::first_text_part;
use common::ports::outbound::GenerativeModel;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GeminiKnowledgeSynthesizer {
    model: Arc<dyn GenerativeModel>,
    model_name: ModelName,
}

impl GeminiKnowledgeSynthesizer {
    pub fn new(model: Arc<dyn GenerativeModel>, model_name: ModelName) -> Self {
        Self { model, model_name }
    }
}

/// 応答スキーマ（type は 4 値に制約）
fn response_schema() -> Value {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "type": { "type": "STRING", "enum": categories },
            "valueScore": { "type": "INTEGER" },
            "actionItems": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": SCHEMA_FIELDS
    })
}

/// generateContent のリクエスト JSON
pub fn synthesis_payload(request: &SynthesisRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt() }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

impl KnowledgeSynthesizer for GeminiKnowledgeSynthesizer {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<String, Error> {
        let payload = synthesis_payload(request);
        let response = self.model.generate_content(&self.model_name, &payload)?;
        first_text_part(&response)
            .ok_or_else(|| Error::json("Synthesis response contained no text part"))
    }
}
