//! 標準アダプターで配線した Runner を --offline で実行する（AUDLIS_HOME は tempdir）
//!
//! 環境変数を書き換えるため、1 つのテスト関数の中で順に実行する。

use crate::domain::{AudlisCommand, Locale, StylePreset};
use crate::ports::inbound::UseCaseRunner;
use crate::wiring::{self, WireOptions, LOG_FILE, STORAGE_DIR};
use common::error::Error;
use tempfile::tempdir;

fn run_app(command: AudlisCommand) -> Result<i32, Error> {
    let app = wiring::wire_audlis(WireOptions {
        verbose: false,
        offline: true,
    })?;
    let runner = crate::Runner { app };
    runner.run(command)
}

#[test]
fn test_run_app_offline_lifecycle() {
    let home = tempdir().unwrap();
    std::env::set_var("AUDLIS_HOME", home.path());

    let code = run_app(AudlisCommand::Capture {
        transcript: Some("offline note".to_string()),
    })
    .unwrap();
    assert_eq!(code, 0);
    let blob =
        std::fs::read_to_string(home.path().join(STORAGE_DIR).join("audlis_entries.json")).unwrap();
    assert!(blob.contains("offline note"));
    assert!(blob.contains("unindexed"));

    assert_eq!(
        run_app(AudlisCommand::List {
            search: Some("资产".to_string()),
            recent: Some(1)
        })
        .unwrap(),
        0
    );
    assert_eq!(run_app(AudlisCommand::Stats { weeks: 2 }).unwrap(), 0);
    assert_eq!(
        run_app(AudlisCommand::Lang {
            locale: Some(Locale::En)
        })
        .unwrap(),
        0
    );

    // オフラインでは画像は生成されない（エラーではなく終了コード 1）
    let out = home.path().join("motif.png");
    assert_eq!(
        run_app(AudlisCommand::Image {
            style: String::new(),
            preset: Some(StylePreset::GlassFracture),
            out: Some(out.clone()),
        })
        .unwrap(),
        1
    );
    assert!(!out.exists());

    assert_eq!(run_app(AudlisCommand::Reset).unwrap(), 0);
    assert!(!home.path().join(STORAGE_DIR).join("audlis_entries.json").exists());

    let log = std::fs::read_to_string(home.path().join(LOG_FILE)).unwrap();
    assert!(log.contains("command started: capture"));
    assert!(log.contains("command finished: reset"));
    assert!(log.lines().all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));

    std::fs::write(home.path().join("settings.json"), "{\"timeout_secs\": \"soon\"}").unwrap();
    let err = run_app(AudlisCommand::Stats { weeks: 1 }).unwrap_err();
    assert_eq!(err.exit_code(), 78);

    std::env::remove_var("AUDLIS_HOME");
}
