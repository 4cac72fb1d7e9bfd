pub mod time_parser;
pub mod url_validator;

pub use time_parser::{format_remaining, parse_ttl};
pub use url_validator::{UrlValidationError, validate_url};

/// 短链 token 字符集
pub const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 随机选择字母和数字
    iter::repeat_with(|| TOKEN_ALPHABET[rand::random_range(0..TOKEN_ALPHABET.len())] as char)
        .take(length)
        .collect()
}
