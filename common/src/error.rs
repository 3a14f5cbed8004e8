//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 目的地に到達する路線が1件もない
    #[error("No service reaches that destination: {0}")]
    NoDestinationMatch(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_no_destination() {
        let error = Error::NoDestinationMatch("Rafaela".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "No service reaches that destination: Rafaela");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NoDestinationMatch("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NoDestinationMatch"));
        assert!(debug.contains("テスト"));
    }
}
