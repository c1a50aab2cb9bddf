//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits に揃える。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Http(String),
    #[error("{0}")]
    Json(String),
    #[error("{0}")]
    Env(String),
    #[error("{0}")]
    InvalidArgument(String),
    /// 外部呼び出しが上限時間内に完了しなかった
    #[error("{0}")]
    Timeout(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Io(_) => 74,
            Self::Env(_) => 78,
            Self::Http(_) | Self::Timeout(_) => 70,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::json("x").exit_code(), 65);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::env("x").exit_code(), 78);
        assert_eq!(Error::http("x").exit_code(), 70);
        assert_eq!(Error::timeout("x").exit_code(), 70);
    }

    #[test]
    fn test_display_is_message() {
        let err = Error::http("Gemini API error: quota");
        assert_eq!(err.to_string(), "Gemini API error: quota");
    }

    #[test]
    fn test_from_serde_json_error() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = e.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
