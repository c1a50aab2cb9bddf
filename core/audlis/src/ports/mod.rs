//! Ports & Adapters のポート定義
//!
//! - inbound: CLI がアプリを呼び出す入口
//! - outbound: アプリが外界（ストレージ・生成モデル）に依頼するための trait

pub mod inbound;
pub mod outbound;
