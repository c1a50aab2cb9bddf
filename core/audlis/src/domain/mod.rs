//! audlis 固有のドメイン型（型と不変条件）と純粋関数

pub mod analytics;
pub mod category;
pub mod command;
pub mod entry;
pub mod image;
pub mod locale;
pub mod seed;
pub mod synthesis;
pub mod value_score;

pub use analytics::{ActivityGrid, CategoryCount, Dashboard};
pub use category::Category;
pub use command::AudlisCommand;
pub use entry::KnowledgeEntry;
pub use image::{ImageAsset, StylePreset};
pub use locale::Locale;
pub use synthesis::{SynthesisDraft, SynthesisRequest};
pub use value_score::ValueScore;
