//! ダッシュボード用の集計
//!
//! すべてエントリ列のスナップショットに対する純粋関数。状態を持たず、入力を変更しない。

use crate::domain::{Category, KnowledgeEntry};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

const DAYS_PER_WEEK: usize = 7;

/// 活動グリッドの既定の週数
pub const DEFAULT_ACTIVITY_WEEKS: usize = 24;

/// 分類ごとの件数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// 分類ごとの件数（固定順、0 件の分類は含めない）
pub fn category_breakdown(entries: &[KnowledgeEntry]) -> Vec<CategoryCount> {
    Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: count_in_category(entries, category),
        })
        .filter(|c| c.count > 0)
        .collect()
}

pub fn count_in_category(entries: &[KnowledgeEntry], category: Category) -> usize {
    entries.iter().filter(|e| e.category == category).count()
}

/// valueScore の平均（四捨五入）。空なら 0。
pub fn mean_value_score(entries: &[KnowledgeEntry]) -> u8 {
    if entries.is_empty() {
        return 0;
    }
    let sum: u64 = entries.iter().map(|e| e.value_score.get() as u64).sum();
    let n = entries.len() as u64;
    ((sum * 2 + n) / (n * 2)) as u8
}

/// 週 × 曜日（月曜始まり, UTC）の件数グリッド
///
/// `weeks[0]` が最も古い週、最後が `now` を含む週。空のセルも 0 として必ず存在する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGrid {
    /// 最初の週の月曜（UTC）
    pub start: NaiveDate,
    pub weeks: Vec<[u32; DAYS_PER_WEEK]>,
}

impl ActivityGrid {
    pub fn max(&self) -> u32 {
        self.weeks
            .iter()
            .flat_map(|w| w.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.weeks.iter().flat_map(|w| w.iter()).sum()
    }

    /// 最大値を 1.0 とした濃さ（全セル 0 なら 0.0）
    pub fn intensity(&self, week: usize, day: usize) -> f32 {
        let max = self.max();
        match self.weeks.get(week).and_then(|w| w.get(day)) {
            Some(&c) if max > 0 => c as f32 / max as f32,
            _ => 0.0,
        }
    }
}

/// epoch ミリ秒の UTC 日付。表せない値は None。
fn utc_date(ms: u64) -> Option<NaiveDate> {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.date_naive())
}

/// `now_ms` を含む週で終わる `weeks` 週分の活動グリッド。窓の外のエントリは数えない。
pub fn activity_grid(entries: &[KnowledgeEntry], now_ms: u64, weeks: usize) -> ActivityGrid {
    let today = utc_date(now_ms).unwrap_or(NaiveDate::MAX);
    let this_monday = today
        .checked_sub_days(Days::new(today.weekday().num_days_from_monday() as u64))
        .unwrap_or(today);
    let span_before = weeks.saturating_sub(1).saturating_mul(DAYS_PER_WEEK) as u64;
    let start = this_monday
        .checked_sub_days(Days::new(span_before))
        .unwrap_or(NaiveDate::MIN);
    let cells = weeks.saturating_mul(DAYS_PER_WEEK) as i64;

    let mut grid = vec![[0u32; DAYS_PER_WEEK]; weeks];
    for date in entries.iter().filter_map(|e| utc_date(e.created_at)) {
        let offset = date.signed_duration_since(start).num_days();
        if offset < 0 || offset >= cells {
            continue;
        }
        let offset = offset as usize;
        if let Some(week) = grid.get_mut(offset / DAYS_PER_WEEK) {
            week[offset % DAYS_PER_WEEK] += 1;
        }
    }
    ActivityGrid { start, weeks: grid }
}

/// ダッシュボード 1 画面分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total: usize,
    pub mean_value_score: u8,
    pub training_count: usize,
    pub categories: Vec<CategoryCount>,
    pub activity: ActivityGrid,
}

impl Dashboard {
    pub fn compute(entries: &[KnowledgeEntry], now_ms: u64, weeks: usize) -> Self {
        Self {
            total: entries.len(),
            mean_value_score: mean_value_score(entries),
            training_count: count_in_category(entries, Category::Training),
            categories: category_breakdown(entries),
            activity: activity_grid(entries, now_ms, weeks),
        }
    }
}
