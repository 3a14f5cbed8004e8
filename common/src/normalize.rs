//! 比較用テキスト正規化
//!
//! - アクセント記号を除去してASCIIに変換（Ñ→n, á→a）
//! - 前後の空白を除去
//! - 小文字化

use deunicode::deunicode_char;

/// テキストを比較用の正規形に変換する
///
/// ASCIIに変換できない文字はそのまま残す。失敗することはない。
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match deunicode_char(c) {
            Some(ascii) => result.push_str(ascii),
            None => result.push(c),
        }
    }

    result.trim().to_lowercase()
}

/// `haystack` が `needle` を（正規化した上で）部分文字列として含むか
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize_text(haystack).contains(&normalize_text(needle))
}
