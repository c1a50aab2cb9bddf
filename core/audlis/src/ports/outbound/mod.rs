//! Outbound ポート: アプリが外界（キー値ストレージ・合成サービス）を使うための trait

pub mod entry_persistence;
pub mod image_synthesizer;
pub mod key_value_storage;
pub mod knowledge_synthesizer;
pub mod locale_preference;

pub use entry_persistence::EntryPersistence;
pub use image_synthesizer::ImageSynthesizer;
pub use key_value_storage::KeyValueStorage;
pub use knowledge_synthesizer::KnowledgeSynthesizer;
pub use locale_preference::LocalePreference;
