use crate::domain::analytics::DEFAULT_ACTIVITY_WEEKS;
use crate::domain::{AudlisCommand, Locale, StylePreset};
use clap::builder::{ArgAction, PossibleValuesParser};
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

const BIN_NAME: &str = "audlis";

/// CLI から受け取った設定（グローバルオプション + コマンド）
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// --offline: 生成モデルを呼ばずにフォールバック経路だけを使う
    pub offline: bool,
    pub command: AudlisCommand,
}

/// 解析結果: 通常の Config / ヘルプ表示 / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    /// 表示してそのまま終了する（-h, --version, サブコマンドなし）
    Help(String),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::Arg::new("verbose")
            .short('v')
            .long("verbose")
            .global(true)
            .help("Mirror structured log records on stderr")
            .action(ArgAction::SetTrue),
    )
    .arg(
        clap::Arg::new("offline")
            .long("offline")
            .global(true)
            .help("Do not call the generative model (always use fallbacks)")
            .action(ArgAction::SetTrue),
    )
    .arg(
        clap::Arg::new("completion")
            .long("completion")
            .value_name("shell")
            .help("Generate shell completion script")
            .value_parser(value_parser!(Shell))
            .num_args(1),
    )
}

fn build_image_subcommand() -> clap::Command {
    let presets: Vec<&'static str> = StylePreset::ALL.iter().map(|p| p.name()).collect();
    clap::Command::new("image")
        .about("Generate a brand motif image")
        .arg(
            clap::Arg::new("style")
                .value_name("STYLE")
                .help("Aesthetic context (empty for the default glass motif)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
        .arg(
            clap::Arg::new("preset")
                .long("preset")
                .value_name("NAME")
                .help("Use a predefined style")
                .value_parser(PossibleValuesParser::new(presets))
                .conflicts_with("style"),
        )
        .arg(
            clap::Arg::new("out")
                .short('o')
                .long("out")
                .value_name("FILE")
                .help("Write the decoded image to FILE instead of printing the data URI")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new(BIN_NAME)
            .about("Turn spoken notes into structured knowledge entries")
            .version(env!("CARGO_PKG_VERSION"))
            .subcommand_required(false)
            .subcommand(
                clap::Command::new("capture")
                    .about("Synthesize a transcript into an entry and store it")
                    .arg(
                        clap::Arg::new("text")
                            .value_name("TEXT")
                            .num_args(0..)
                            .trailing_var_arg(true),
                    )
                    .arg(
                        clap::Arg::new("demo")
                            .long("demo")
                            .help("Use the demo transcript of the current locale")
                            .action(ArgAction::SetTrue)
                            .conflicts_with("text"),
                    ),
            )
            .subcommand(
                clap::Command::new("list")
                    .about("List stored entries (most recent first)")
                    .arg(
                        clap::Arg::new("search")
                            .short('s')
                            .long("search")
                            .value_name("QUERY")
                            .help("Case-insensitive title filter"),
                    )
                    .arg(
                        clap::Arg::new("recent")
                            .short('n')
                            .long("recent")
                            .value_name("N")
                            .help("Show only the first N entries")
                            .value_parser(value_parser!(usize)),
                    ),
            )
            .subcommand(
                clap::Command::new("stats")
                    .about("Show the dashboard (totals, mean score, categories, activity)")
                    .arg(
                        clap::Arg::new("weeks")
                            .short('w')
                            .long("weeks")
                            .value_name("N")
                            .help("Activity grid width in weeks (default 24)")
                            .value_parser(value_parser!(u64).range(1..=520)),
                    ),
            )
            .subcommand(build_image_subcommand())
            .subcommand(
                clap::Command::new("lang")
                    .about("Show or set the locale (en, zh)")
                    .arg(clap::Arg::new("locale").value_name("LOCALE").num_args(0..=1)),
            )
            .subcommand(clap::Command::new("reset").about("Clear the entry store")),
    )
}

fn joined(matches: &clap::ArgMatches, id: &str) -> Option<String> {
    matches
        .get_many::<String>(id)
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
}

fn matches_to_command(matches: &clap::ArgMatches) -> Result<Option<AudlisCommand>, Error> {
    let command = match matches.subcommand() {
        None => return Ok(None),
        Some(("capture", m)) => {
            let text = joined(m, "text");
            if text.is_none() && !m.get_flag("demo") {
                return Err(Error::invalid_argument(
                    "capture requires TEXT or --demo".to_string(),
                ));
            }
            AudlisCommand::Capture { transcript: text }
        }
        Some(("list", m)) => AudlisCommand::List {
            search: m.get_one::<String>("search").cloned(),
            recent: m.get_one::<usize>("recent").copied(),
        },
        Some(("stats", m)) => AudlisCommand::Stats {
            weeks: m
                .get_one::<u64>("weeks")
                .map(|w| *w as usize)
                .unwrap_or(DEFAULT_ACTIVITY_WEEKS),
        },
        Some(("image", m)) => AudlisCommand::Image {
            style: joined(m, "style").unwrap_or_default(),
            preset: m
                .get_one::<String>("preset")
                .and_then(|name| StylePreset::parse(name)),
            out: m.get_one::<PathBuf>("out").cloned(),
        },
        Some(("lang", m)) => {
            let locale = match m.get_one::<String>("locale") {
                None => None,
                Some(s) => Some(Locale::parse(s).ok_or_else(|| {
                    Error::invalid_argument(format!("Unknown locale '{}' (expected en or zh)", s))
                })?),
            };
            AudlisCommand::Lang { locale }
        }
        Some(("reset", _)) => AudlisCommand::Reset,
        Some((name, _)) => {
            return Err(Error::invalid_argument(format!(
                "Command '{}' is not implemented.",
                name
            )))
        }
    };
    Ok(Some(command))
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = build_clap_command();
    let matches = match cmd.try_get_matches_from_mut(args) {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(ParseOutcome::Help(e.to_string()));
        }
        Err(e) => return Err(Error::invalid_argument(e.to_string())),
    };

    if let Some(&shell) = matches.get_one::<Shell>("completion") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    match matches_to_command(&matches)? {
        Some(command) => Ok(ParseOutcome::Config(Config {
            verbose: matches.get_flag("verbose"),
            offline: matches.get_flag("offline"),
            command,
        })),
        None => Ok(ParseOutcome::Help(cmd.render_help().to_string())),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}
