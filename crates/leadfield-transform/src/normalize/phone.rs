//! Phone number reformatting.

/// Rewrite an international dialing prefix written as `00` into `+`.
///
/// Only the exact shape "two leading zeros followed by one or more digits"
/// qualifies; everything else returns `None` and is left untouched. A
/// rewritten number is always textual, never a numeric or date candidate.
pub fn reformat_international(value: &str) -> Option<String> {
    let rest = value.strip_prefix("00")?;
    if rest.is_empty() || !rest.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(format!("+{rest}"))
}
