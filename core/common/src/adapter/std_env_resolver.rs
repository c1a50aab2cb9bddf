//! std::env を使う EnvResolver 実装

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::path::PathBuf;

/// ホームディレクトリを明示する環境変数
pub const HOME_ENV: &str = "AUDLIS_HOME";
const APP_DIR: &str = "audlis";

#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

/// AUDLIS_HOME → $XDG_CONFIG_HOME/audlis → $HOME/.config/audlis
fn home_from(var: impl Fn(&str) -> Option<String>) -> Result<HomeDir, Error> {
    if let Some(home) = var(HOME_ENV) {
        return Ok(HomeDir::new(home));
    }
    let config_base = var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env(format!("Neither {} nor HOME is set", HOME_ENV)))?;
    Ok(HomeDir::new(config_base.join(APP_DIR)))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        home_from(|name| self.var(name))
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|s| !s.is_empty())
    }
}
