//! ロケール設定の永続化 Outbound ポート

use crate::domain::Locale;
use common::error::Error;

pub trait LocalePreference: Send + Sync {
    /// 未設定・不明な値なら Ok(None)
    fn load(&self) -> Result<Option<Locale>, Error>;
    fn save(&self, locale: Locale) -> Result<(), Error>;
}
