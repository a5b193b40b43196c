//! Utility functions and helpers for the gateway.

pub mod logging;

/// Number of leading token characters left visible in log output
const VISIBLE_CHARS: usize = 6;

/// Mask a token for logging, keeping only a short identifying prefix
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= VISIBLE_CHARS {
        "***".to_string()
    } else {
        let head: String = token.chars().take(VISIBLE_CHARS).collect();
        format!("{}***", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_tokens_keep_a_prefix() {
        assert_eq!(mask_token("abcdef0123456789"), "abcdef***");
    }

    #[test]
    fn short_tokens_are_fully_masked() {
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token(""), "***");
        assert_eq!(mask_token("abcdef"), "***");
    }

    #[test]
    fn multibyte_tokens_do_not_split_characters() {
        assert_eq!(mask_token("токен-доступа"), "токен-***");
    }
}
