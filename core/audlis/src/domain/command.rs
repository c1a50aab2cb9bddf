//! audlis コマンドの enum（Command Pattern）
//!
//! CLI の解析結果をユースケースの呼び分けに変換したもの。

use crate::domain::{Locale, StylePreset};
use std::path::PathBuf;

/// audlis の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum AudlisCommand {
    /// 転写文を取り込んで保存する。`transcript` が None ならデモ用の転写文。
    Capture { transcript: Option<String> },
    /// 一覧（タイトル検索・先頭 n 件）
    List {
        search: Option<String>,
        recent: Option<usize>,
    },
    /// ダッシュボード集計
    Stats { weeks: usize },
    /// ブランド画像の生成
    Image {
        style: String,
        preset: Option<StylePreset>,
        out: Option<PathBuf>,
    },
    /// ロケール設定の表示（None）または変更
    Lang { locale: Option<Locale> },
    /// ストアを空にする
    Reset,
}

impl AudlisCommand {
    /// ログ用の短い名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Capture { .. } => "capture",
            Self::List { .. } => "list",
            Self::Stats { .. } => "stats",
            Self::Image { .. } => "image",
            Self::Lang { .. } => "lang",
            Self::Reset => "reset",
        }
    }
}
