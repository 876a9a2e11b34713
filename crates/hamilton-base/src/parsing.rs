use std::str::FromStr;

use anyhow::Context;

pub const SIGNS: [char; 2] = ['-', '+'];

/// Splits `src` in front of every sign that starts a new term.
///
/// A leading sign stays with the first term and a sign right after a float
/// exponent marker (`1e-5`) belongs to the number.
pub fn split_signed_terms(src: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;
    let mut prev = None;
    for (idx, ch) in src.char_indices() {
        if idx > start && SIGNS.contains(&ch) && !matches!(prev, Some('e') | Some('E')) {
            terms.push(&src[start..idx]);
            start = idx;
        }
        prev = Some(ch);
    }
    terms.push(&src[start..]);
    terms
}

/// Parses one numeric component, accepting the unicode minus sign.
pub fn parse_scalar<T>(src: &str) -> Result<T, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let src = src.trim().replace('\u{2212}', "-");
    src.parse::<T>()
        .with_context(|| format!("Invalid number `{src}`"))
}
