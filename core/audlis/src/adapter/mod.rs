//! アダプター（ports の実装）

pub(crate) mod file_key_value_storage;
pub(crate) mod gemini_image;
pub(crate) mod gemini_synthesizer;
pub(crate) mod kv_persistence;
pub(crate) mod settings;
pub(crate) mod stubs;

pub(crate) use file_key_value_storage::FileKeyValueStorage;
pub(crate) use gemini_image::GeminiImageSynthesizer;
pub(crate) use gemini_synthesizer::GeminiKnowledgeSynthesizer;
pub(crate) use kv_persistence::{KeyValueEntryPersistence, KeyValueLocalePreference};
pub(crate) use settings::Settings;
