//! 生成モデルクライアント
//!
//! GenerativeModel ポートの実装（Gemini REST / オフライン）と、
//! generateContent レスポンスから part を取り出すヘルパー。

pub mod gemini;
pub mod offline;

pub use gemini::{first_inline_data, first_text_part, GeminiClient, InlineData};
pub use offline::OfflineModel;
