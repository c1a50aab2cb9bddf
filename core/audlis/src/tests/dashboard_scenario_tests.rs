//! 取り込み結果からダッシュボード・画像生成までのシナリオ

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{start_app, MONDAY_NOON};
use crate::adapter::stubs::{
    InMemoryKeyValueStorage, RecordingLog, StubImageSynthesizer, StubKnowledgeSynthesizer,
};
use crate::domain::analytics::{CategoryCount, DEFAULT_ACTIVITY_WEEKS};
use crate::domain::image::{DEFAULT_CONTEXT, HOUSE_STYLE};
use crate::domain::{Category, ImageAsset, SynthesisRequest};
use crate::ports::outbound::KnowledgeSynthesizer;
use crate::usecase::AudlisApp;
use chrono::NaiveDate;
use common::error::Error;

/// 呼ばれるたびに次の応答を返す（尽きたら失敗）
struct ScriptedSynthesizer(Mutex<VecDeque<String>>);

impl ScriptedSynthesizer {
    fn new(responses: &[(&str, u8)]) -> Self {
        Self(Mutex::new(
            responses
                .iter()
                .map(|(category, score)| {
                    format!(r#"{{"title":"t","type":"{}","valueScore":{}}}"#, category, score)
                })
                .collect(),
        ))
    }
}

impl KnowledgeSynthesizer for ScriptedSynthesizer {
    fn synthesize(&self, _request: &SynthesisRequest) -> Result<String, Error> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::http("script exhausted"))
    }
}

fn empty_app(responses: &[(&str, u8)]) -> AudlisApp {
    let app = start_app(
        Arc::new(InMemoryKeyValueStorage::default()),
        Arc::new(ScriptedSynthesizer::new(responses)),
        Arc::new(StubImageSynthesizer::new(Ok(None))),
        Arc::new(RecordingLog::default()),
    );
    app.reset().unwrap();
    app
}

#[test]
fn test_empty_store_dashboard_renders_zeros() {
    let app = empty_app(&[]);
    let d = app.dashboard(DEFAULT_ACTIVITY_WEEKS);
    assert_eq!(d.total, 0);
    assert_eq!(d.mean_value_score, 0);
    assert_eq!(d.training_count, 0);
    assert!(d.categories.is_empty());
    assert_eq!(d.activity.weeks.len(), DEFAULT_ACTIVITY_WEEKS);
    assert_eq!(d.activity.total(), 0);
}

#[test]
fn test_dashboard_follows_captures() {
    let app = empty_app(&[("strategy", 80), ("strategy", 90), ("training", 100)]);
    for t in ["a", "b", "c"] {
        app.capture(t);
    }
    let d = app.dashboard(4);
    assert_eq!(d.total, 3);
    assert_eq!(d.mean_value_score, 90);
    assert_eq!(d.training_count, 1);
    assert_eq!(
        d.categories,
        vec![
            CategoryCount { category: Category::Strategy, count: 2 },
            CategoryCount { category: Category::Training, count: 1 },
        ]
    );
    // 全件 MONDAY_NOON 直後なので最後の週の月曜に集まる
    assert_eq!(d.activity.weeks[3][0], 3);
    assert_eq!(d.activity.total(), 3);
}

#[test]
fn test_dashboard_counts_fallback_entries_too() {
    let app = empty_app(&[("client", 60)]);
    app.capture("scripted");
    app.capture("falls back");
    let d = app.dashboard(1);
    assert_eq!(d.total, 2);
    assert_eq!(d.mean_value_score, 55);
    assert_eq!(
        d.categories,
        vec![
            CategoryCount { category: Category::Operations, count: 1 },
            CategoryCount { category: Category::Client, count: 1 },
        ]
    );
}

#[test]
fn test_seeded_dashboard_spans_two_weeks() {
    let app = start_app(
        Arc::new(InMemoryKeyValueStorage::default()),
        Arc::new(StubKnowledgeSynthesizer::text("{}")),
        Arc::new(StubImageSynthesizer::new(Ok(None))),
        Arc::new(RecordingLog::default()),
    );
    let d = app.dashboard(2);
    // 月曜 10:00 / 前週の日曜 / 前週の金曜
    assert_eq!(d.activity.weeks[1][0], 1);
    assert_eq!(d.activity.weeks[0][6], 1);
    assert_eq!(d.activity.weeks[0][4], 1);
    assert_eq!(d.activity.start, NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
}

#[test]
fn test_generate_image_empty_context_without_image_is_none() {
    let images = Arc::new(StubImageSynthesizer::new(Ok(None)));
    let app = start_app(
        Arc::new(InMemoryKeyValueStorage::default()),
        Arc::new(StubKnowledgeSynthesizer::text("{}")),
        images.clone(),
        Arc::new(RecordingLog::default()),
    );
    assert_eq!(app.generate_image(""), None);
    assert_eq!(
        images.prompts(),
        vec![format!("{}\nSpecific Aesthetic Context: {}", HOUSE_STYLE, DEFAULT_CONTEXT)]
    );
}

#[test]
fn test_generate_image_failure_does_not_touch_entries() {
    let app = start_app(
        Arc::new(InMemoryKeyValueStorage::default()),
        Arc::new(StubKnowledgeSynthesizer::text("{}")),
        Arc::new(StubImageSynthesizer::new(Err(Error::timeout("image timed out")))),
        Arc::new(RecordingLog::default()),
    );
    let before = app.entries();
    assert_eq!(app.generate_image("glass"), None);
    assert_eq!(app.entries(), before);
}

#[test]
fn test_generate_image_returns_data_uri() {
    let asset = ImageAsset::from_inline(None, "iVBORw0KGgo=");
    let app = start_app(
        Arc::new(InMemoryKeyValueStorage::default()),
        Arc::new(StubKnowledgeSynthesizer::text("{}")),
        Arc::new(StubImageSynthesizer::new(Ok(Some(asset)))),
        Arc::new(RecordingLog::default()),
    );
    let got = app.generate_image("mercury").unwrap();
    assert_eq!(got.data_uri(), "data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(got.decode().unwrap(), b"\x89PNG\r\n\x1a\n".to_vec());
}
