mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::render::{render_dashboard, render_entry, render_list};
use cli::{parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::AudlisCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_audlis, App, WireOptions};

/// AudlisCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn dispatch(&self, command: AudlisCommand) -> Result<i32, Error> {
        let audlis = &self.app.audlis;
        match command {
            AudlisCommand::Capture { transcript } => {
                let entry = match transcript {
                    Some(t) => audlis.capture(&t),
                    None => audlis.capture_demo(),
                };
                print!("{}", render_entry(&entry));
                Ok(0)
            }
            AudlisCommand::List { search, recent } => {
                let entries = match (search, recent) {
                    (Some(q), n) => {
                        let mut hits = audlis.search(&q);
                        hits.truncate(n.unwrap_or(usize::MAX));
                        hits
                    }
                    (None, Some(n)) => audlis.recent(n),
                    (None, None) => audlis.entries(),
                };
                print!("{}", render_list(&entries));
                Ok(0)
            }
            AudlisCommand::Stats { weeks } => {
                print!("{}", render_dashboard(&audlis.dashboard(weeks)));
                Ok(0)
            }
            AudlisCommand::Image { style, preset, out } => {
                let context = preset.map(|p| p.context().to_string()).unwrap_or(style);
                let Some(asset) = audlis.generate_image(&context) else {
                    eprintln!("audlis: no image produced");
                    return Ok(1);
                };
                match out {
                    Some(path) => {
                        let bytes = asset.decode()?;
                        self.app.fs.write_bytes(&path, &bytes)?;
                        println!(
                            "{} ({}, {} bytes)",
                            path.display(),
                            asset.mime_type(),
                            bytes.len()
                        );
                    }
                    None => println!("{}", asset.data_uri()),
                }
                Ok(0)
            }
            AudlisCommand::Lang { locale } => {
                if let Some(locale) = locale {
                    audlis.set_locale(locale)?;
                }
                println!("{}", audlis.locale());
                Ok(0)
            }
            AudlisCommand::Reset => {
                audlis.reset()?;
                println!("entry store cleared");
                Ok(0)
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, command: AudlisCommand) -> Result<i32, Error> {
        let name = command.name();
        let _ = self.app.logger.log(&LogRecord::new(
            LogLevel::Info,
            "cli",
            "lifecycle",
            format!("command started: {}", name),
        ));
        let result = self.dispatch(command);
        let record = match &result {
            Ok(code) => LogRecord::new(
                LogLevel::Info,
                "cli",
                "lifecycle",
                format!("command finished: {}", name),
            )
            .field("exit_code", *code),
            Err(e) => LogRecord::new(
                LogLevel::Error,
                "cli",
                "lifecycle",
                format!("command failed: {}: {}", name, e),
            )
            .field("exit_code", e.exit_code()),
        };
        let _ = self.app.logger.log(&record);
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("audlis: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::Help(text) => {
            print!("{}", text);
            return Ok(0);
        }
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_audlis(WireOptions {
        verbose: config.verbose,
        offline: config.offline,
    })?;
    let runner = Runner { app };
    runner.run(config.command)
}
