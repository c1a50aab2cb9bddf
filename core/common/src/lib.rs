//! Audlis 共通ライブラリ
//!
//! アプリ本体（`audlis`）が使うエラー型・ドメイン Newtype・Outbound ポートと、
//! その標準アダプタ（時刻・FS・ID・ログ・環境変数・Gemini クライアント）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン Newtype
pub mod domain;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// 生成モデルクライアント
pub mod llm;
