//! Tuido 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! 核心 store 的操作全部不可失败；错误只来自配置读写。

use std::io;
use thiserror::Error;

/// Tuido 错误类型
#[derive(Debug, Error)]
pub enum TuidoError {
    /// I/O 错误（文件读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Tuido Result 类型别名
pub type Result<T> = std::result::Result<T, TuidoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TuidoError = io_err.into();
        assert!(matches!(err, TuidoError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_parse_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("= not toml").unwrap_err();
        let err: TuidoError = parse_err.into();
        assert!(matches!(err, TuidoError::TomlParse(_)));
    }
}
