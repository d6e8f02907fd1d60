// src/utils/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;

// 厳密なRFC準拠ではなく、明らかな入力ミスを弾く程度のチェック
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// メールアドレスの形式チェック
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
