//! PIX key shape checking.
//!
//! The central bank accepts five key shapes: CPF (11 digits), CNPJ (14
//! digits), phone (10-11 digits), e-mail, and the random UUID key. The
//! check here is purely structural; ownership and registration can only be
//! verified by the payment rail itself, so a failed check is advisory.

use uuid::Uuid;

/// Returns true when the key matches one of the five registrable shapes.
///
/// Document and phone keys may carry the usual punctuation
/// (`123.456.789-09`, `(11) 91234-5678`); only the digit count is judged.
pub fn is_plausible_pix_key(key: &str) -> bool {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return false;
    }

    if Uuid::parse_str(trimmed).is_ok() {
        return true;
    }

    if trimmed.contains('@') {
        return looks_like_email(trimmed);
    }

    let punctuation_only = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '/' | '+' | ' ' | '(' | ')'));
    if !punctuation_only {
        return false;
    }

    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    // CPF 11, CNPJ 14, phone 10-11 (the 11-digit case overlaps CPF)
    matches!(digits, 10 | 11 | 14)
}

fn looks_like_email(candidate: &str) -> bool {
    let mut parts = candidate.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
